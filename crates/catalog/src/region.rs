use serde::{Deserialize, Serialize};

use crate::CatalogError;

/// Brazilian federative units (26 states + the federal district).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RegionCode {
    AC,
    AL,
    AP,
    AM,
    BA,
    CE,
    DF,
    ES,
    GO,
    MA,
    MT,
    MS,
    MG,
    PA,
    PB,
    PR,
    PE,
    PI,
    RJ,
    RN,
    RS,
    RO,
    RR,
    SC,
    SP,
    SE,
    TO,
}

/// Canonical listing order. This is the order the state selector shows, which
/// is alphabetical by label rather than by code.
pub(crate) const REGIONS: [RegionCode; 27] = [
    RegionCode::AC,
    RegionCode::AL,
    RegionCode::AP,
    RegionCode::AM,
    RegionCode::BA,
    RegionCode::CE,
    RegionCode::DF,
    RegionCode::ES,
    RegionCode::GO,
    RegionCode::MA,
    RegionCode::MT,
    RegionCode::MS,
    RegionCode::MG,
    RegionCode::PA,
    RegionCode::PB,
    RegionCode::PR,
    RegionCode::PE,
    RegionCode::PI,
    RegionCode::RJ,
    RegionCode::RN,
    RegionCode::RS,
    RegionCode::RO,
    RegionCode::RR,
    RegionCode::SC,
    RegionCode::SP,
    RegionCode::SE,
    RegionCode::TO,
];

impl RegionCode {
    pub fn code(self) -> &'static str {
        match self {
            RegionCode::AC => "AC",
            RegionCode::AL => "AL",
            RegionCode::AP => "AP",
            RegionCode::AM => "AM",
            RegionCode::BA => "BA",
            RegionCode::CE => "CE",
            RegionCode::DF => "DF",
            RegionCode::ES => "ES",
            RegionCode::GO => "GO",
            RegionCode::MA => "MA",
            RegionCode::MT => "MT",
            RegionCode::MS => "MS",
            RegionCode::MG => "MG",
            RegionCode::PA => "PA",
            RegionCode::PB => "PB",
            RegionCode::PR => "PR",
            RegionCode::PE => "PE",
            RegionCode::PI => "PI",
            RegionCode::RJ => "RJ",
            RegionCode::RN => "RN",
            RegionCode::RS => "RS",
            RegionCode::RO => "RO",
            RegionCode::RR => "RR",
            RegionCode::SC => "SC",
            RegionCode::SP => "SP",
            RegionCode::SE => "SE",
            RegionCode::TO => "TO",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RegionCode::AC => "Acre",
            RegionCode::AL => "Alagoas",
            RegionCode::AP => "Amapá",
            RegionCode::AM => "Amazonas",
            RegionCode::BA => "Bahia",
            RegionCode::CE => "Ceará",
            RegionCode::DF => "Distrito Federal",
            RegionCode::ES => "Espírito Santo",
            RegionCode::GO => "Goiás",
            RegionCode::MA => "Maranhão",
            RegionCode::MT => "Mato Grosso",
            RegionCode::MS => "Mato Grosso do Sul",
            RegionCode::MG => "Minas Gerais",
            RegionCode::PA => "Pará",
            RegionCode::PB => "Paraíba",
            RegionCode::PR => "Paraná",
            RegionCode::PE => "Pernambuco",
            RegionCode::PI => "Piauí",
            RegionCode::RJ => "Rio de Janeiro",
            RegionCode::RN => "Rio Grande do Norte",
            RegionCode::RS => "Rio Grande do Sul",
            RegionCode::RO => "Rondônia",
            RegionCode::RR => "Roraima",
            RegionCode::SC => "Santa Catarina",
            RegionCode::SP => "São Paulo",
            RegionCode::SE => "Sergipe",
            RegionCode::TO => "Tocantins",
        }
    }

    /// Looks a code up in the closed table. Codes are matched case-sensitively,
    /// exactly as they appear in file names.
    pub fn parse(code: &str) -> Result<Self, CatalogError> {
        let code = code.trim();
        REGIONS
            .into_iter()
            .find(|r| r.code() == code)
            .ok_or_else(|| CatalogError::UnknownRegion(code.to_string()))
    }
}

impl std::fmt::Display for RegionCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
