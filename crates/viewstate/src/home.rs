use view::{Element, Node};

const INTRO: [&str; 2] = [
    "A ocorrência de incêndios e queimadas representa um dos mais críticos problemas \
     ambientais enfrentados pelo Brasil, com implicações que vão desde a perda de \
     biodiversidade até impactos severos na saúde humana e no clima global. Apesar da \
     disponibilidade de grandes volumes de dados relacionados a esses eventos, os desafios \
     na comunicação clara e impactante dessas informações permanecem, especialmente quando \
     o público-alvo inclui tanto especialistas quanto a sociedade em geral.",
    "Este projeto tem como objetivo principal criar visualizações informativas e intuitivas \
     sobre dados de queimadas no Brasil, tornando-os acessíveis tanto para especialistas \
     quanto para o público em geral. O projeto utiliza dados abertos da plataforma gov.br, \
     focando inicialmente em análises mensais de focos de incêndio, com possibilidade de \
     expansão para padrões anuais e sazonais.",
];

struct Section {
    heading: &'static str,
    lead: Option<&'static str>,
    items: &'static [&'static str],
}

const SECTIONS: [Section; 4] = [
    Section {
        heading: "Etapas do Projeto",
        lead: Some(
            "Os dados brutos são baixados da plataforma gov.br e passam pelas etapas abaixo.",
        ),
        items: &[
            "Limpeza dos dados: remoção de entradas com valores faltantes ou inconsistentes (-999).",
            "Formatação: conversão de datas e horas para o formato apropriado.",
            "Seleção de atributos: exclusão de atributos irrelevantes (municipio_id, estado_id, pais_id).",
            "Visualização geral: distribuição espacial dos focos de incêndio no Brasil.",
            "Visualizações por estados e por biomas, com detalhes de cada foco.",
            "Classificação por potência do fogo (frp) e por risco de fogo.",
            "Geração de arquivos HTML com todas as visualizações (Plotly).",
        ],
    },
    Section {
        heading: "Características Principais dos Dados",
        lead: None,
        items: &[
            "Formato: CSV (Comma-Separated Values).",
            "Conteúdo: localização geográfica, data e hora, bioma, intensidade do fogo, risco de fogo e dados meteorológicos.",
            "Tamanho original: 588.262 registros e 16 colunas.",
            "Tamanho utilizado: 50.000 registros e 15 colunas após o tratamento.",
        ],
    },
    Section {
        heading: "Atributos",
        lead: None,
        items: &[
            "lat, lon: coordenadas do foco de incêndio.",
            "data_hora_gmt: data e hora do registro em GMT.",
            "satelite: satélite responsável pelo registro.",
            "municipio, estado: localização administrativa do foco.",
            "numero_dias_sem_chuva: número de dias sem chuva na região.",
            "precipitacao: precipitação em mm.",
            "risco_fogo: índice de risco de fogo.",
            "bioma: bioma onde o foco foi registrado.",
            "frp: Fire Radiative Power (potência radiativa do fogo).",
        ],
    },
    Section {
        heading: "Tratamento dos Dados",
        lead: Some("Após o tratamento houve uma redução de aproximadamente 20% do conjunto original."),
        items: &[
            "Remoção de valores faltantes nas colunas numero_dias_sem_chuva, precipitacao, risco_fogo e frp.",
            "Exclusão de entradas com valor -999 nessas mesmas colunas.",
            "Remoção de atributos irrelevantes (id, pais, municipio_id, estado_id, pais_id).",
        ],
    },
];

/// Narrative shown on the home view.
pub fn home_content() -> Node {
    let mut root = Element::new("div")
        .attr("class", "home-content")
        .children(INTRO.iter().map(|p| Element::new("p").text(*p)));
    for section in &SECTIONS {
        root = root.child(Element::new("h3").text(section.heading));
        if let Some(lead) = section.lead {
            root = root.child(Element::new("p").text(lead));
        }
        root = root.child(
            Element::new("ul").children(section.items.iter().map(|i| Element::new("li").text(*i))),
        );
    }
    root.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_content_has_every_section() {
        let text = home_content().text_content();
        for s in &SECTIONS {
            assert!(text.contains(s.heading), "missing section {}", s.heading);
        }
        assert!(text.starts_with("A ocorrência de incêndios"));
    }

    #[test]
    fn home_content_is_not_empty_markup() {
        let html = view::to_html(&home_content());
        assert!(html.starts_with("<div class=\"home-content\"><p>"));
        assert!(html.contains("<li>frp: Fire Radiative Power"));
    }
}
