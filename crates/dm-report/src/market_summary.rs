//! Analytical market summary from `market_statistics.json`.

use std::fmt;

use dm_core::entities::MarketStatisticsDocument;

use crate::UNKNOWN_DATE;
use crate::cell::OrNa;

const DEFAULT_CAGR_SOURCE: &str = "Fontes Diversas";

/// [`fmt::Display`] adapter rendering a [`MarketStatisticsDocument`].
pub struct MarketSummary<'a>(pub &'a MarketStatisticsDocument);

impl fmt::Display for MarketSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let doc = self.0;
        let last_updated = doc.last_updated.as_deref().unwrap_or(UNKNOWN_DATE);

        write!(
            f,
            "# Resumo Analítico de Mercado - {last_updated}\n\n\
             ## 📈 Tendências e Estatísticas do Setor de Avaliação de Personalidade\n\n\
             **Última Atualização dos Dados:** {last_updated}\n\n\
             Os dados de mercado mais recentes reforçam a importância estratégica do \
             ComunicaPro, que atua em um setor de alto crescimento e valorização.\n\n"
        )?;

        if let Some(stats) = doc
            .market_statistics
            .personality_assessment_solutions
            .as_ref()
            .filter(|stats| !stats.is_empty())
        {
            write!(
                f,
                "### Soluções de Avaliação de Personalidade (Personality Assessment Solutions)\n\n\
                 - **Tamanho do Mercado (2025):** US$ {} Bilhões\n\
                 - **Projeção para 2030:** US$ {} Bilhões\n\
                 - **Taxa de Crescimento Anual Composta (CAGR):** {}% (Fonte: {})\n\n",
                OrNa(stats.market_size_2025_usd_billion.as_ref()),
                OrNa(stats.market_size_2030_projected_usd_billion.as_ref()),
                OrNa(stats.cagr_2025_2030_percent.as_ref()),
                stats.cagr_source.as_deref().unwrap_or(DEFAULT_CAGR_SOURCE),
            )?;
        }

        if !doc.key_trends.is_empty() {
            f.write_str(
                "## 💡 Tendências Chave do Mercado\n\n\
                 O crescimento do setor é impulsionado por:\n",
            )?;
            for (i, trend) in doc.key_trends.iter().enumerate() {
                writeln!(f, "{}. **{trend}**", i + 1)?;
            }
            f.write_str(
                "\nA integração de recursos avançados, como o **Plano de Ação de \
                 Processamento Profundo (PAPP)**, alinha o ComunicaPro com a principal \
                 tendência de mercado: o uso de IA para análises mais profundas e \
                 personalizadas.\n",
            )?;
        }

        Ok(())
    }
}

/// Render the analytical market summary Markdown for `doc`.
#[must_use]
pub fn render_market_summary(doc: &MarketStatisticsDocument) -> String {
    MarketSummary(doc).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const HEAD: &str = "# Resumo Analítico de Mercado - 2025-10-29\n\n\
        ## 📈 Tendências e Estatísticas do Setor de Avaliação de Personalidade\n\n\
        **Última Atualização dos Dados:** 2025-10-29\n\n\
        Os dados de mercado mais recentes reforçam a importância estratégica do ComunicaPro, \
        que atua em um setor de alto crescimento e valorização.\n\n";

    #[test]
    fn full_document() {
        let doc: MarketStatisticsDocument = serde_json::from_str(
            r#"{
                "last_updated": "2025-10-29",
                "market_statistics": {
                    "personality_assessment_solutions": {
                        "market_size_2025_usd_billion": 9.1,
                        "market_size_2030_projected_usd_billion": 15.2,
                        "cagr_2025_2030_percent": 10.5,
                        "cagr_source": "Mordor Intelligence"
                    }
                },
                "key_trends": ["IA para análises preditivas", "Avaliações gamificadas"]
            }"#,
        )
        .unwrap();

        let expected = format!(
            "{HEAD}\
             ### Soluções de Avaliação de Personalidade (Personality Assessment Solutions)\n\n\
             - **Tamanho do Mercado (2025):** US$ 9.1 Bilhões\n\
             - **Projeção para 2030:** US$ 15.2 Bilhões\n\
             - **Taxa de Crescimento Anual Composta (CAGR):** 10.5% (Fonte: Mordor Intelligence)\n\n\
             ## 💡 Tendências Chave do Mercado\n\n\
             O crescimento do setor é impulsionado por:\n\
             1. **IA para análises preditivas**\n\
             2. **Avaliações gamificadas**\n\
             \n\
             A integração de recursos avançados, como o **Plano de Ação de Processamento \
             Profundo (PAPP)**, alinha o ComunicaPro com a principal tendência de mercado: o \
             uso de IA para análises mais profundas e personalizadas.\n"
        );
        assert_eq!(render_market_summary(&doc), expected);
    }

    #[test]
    fn empty_block_and_no_trends_render_head_only() {
        let doc: MarketStatisticsDocument = serde_json::from_str(
            r#"{"last_updated": "2025-10-29",
                "market_statistics": {"personality_assessment_solutions": {}}}"#,
        )
        .unwrap();
        assert_eq!(render_market_summary(&doc), HEAD);
    }

    #[test]
    fn block_with_only_unknown_keys_still_renders() {
        let doc: MarketStatisticsDocument = serde_json::from_str(
            r#"{"last_updated": "2025-10-29",
                "market_statistics": {"personality_assessment_solutions": {"region": "LATAM"}}}"#,
        )
        .unwrap();
        assert_eq!(
            render_market_summary(&doc),
            format!(
                "{HEAD}\
                 ### Soluções de Avaliação de Personalidade (Personality Assessment Solutions)\n\n\
                 - **Tamanho do Mercado (2025):** US$ N/A Bilhões\n\
                 - **Projeção para 2030:** US$ N/A Bilhões\n\
                 - **Taxa de Crescimento Anual Composta (CAGR):** N/A% (Fonte: Fontes Diversas)\n\n"
            )
        );
    }

    #[test]
    fn partial_block_uses_placeholders() {
        let doc: MarketStatisticsDocument = serde_json::from_str(
            r#"{"market_statistics": {"personality_assessment_solutions": {"cagr_2025_2030_percent": 9}}}"#,
        )
        .unwrap();
        let rendered = render_market_summary(&doc);
        assert!(rendered.starts_with("# Resumo Analítico de Mercado - Data Desconhecida\n\n"));
        assert!(rendered.contains("- **Tamanho do Mercado (2025):** US$ N/A Bilhões\n"));
        assert!(rendered.contains("(CAGR):** 9% (Fonte: Fontes Diversas)\n\n"));
    }
}
