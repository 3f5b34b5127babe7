//! Market analysis report from `market_insights*.json`.

use std::fmt;

use dm_core::entities::{MarketInsightRecord, MarketInsightsDocument};

use crate::UNKNOWN_DATE;
use crate::cell::{NOT_AVAILABLE, OrNa};

const TABLE_HEADER: &str = "| Mercado | Tamanho (2024, USD Bilhões) | CAGR (%) | Tamanho Projetado (USD Bilhões) |\n\
                            | :--- | :--- | :--- | :--- |\n";

/// [`fmt::Display`] adapter rendering a [`MarketInsightsDocument`].
pub struct MarketAnalysis<'a>(pub &'a MarketInsightsDocument);

/// Projected size cell: `"{value} (até {year})"`.
struct ProjectionCell<'a>(&'a MarketInsightRecord);

impl fmt::Display for ProjectionCell<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.projection() {
            Some(projection) => write!(f, "{} (até {})", projection.value, projection.year.year()),
            None => f.write_str(NOT_AVAILABLE),
        }
    }
}

impl fmt::Display for MarketAnalysis<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let doc = self.0;
        write!(
            f,
            "# Análise de Mercado - {}\n\n",
            doc.date.as_deref().unwrap_or(UNKNOWN_DATE)
        )?;
        f.write_str("## 📈 Crescimento do Setor de Comunicação e Avaliação\n\n")?;
        f.write_str(
            "Os dados de mercado confirmam o alto potencial de crescimento do setor, com taxas \
             anuais compostas (CAGR) robustas em todas as áreas-chave:\n\n",
        )?;

        if !doc.market_insights.is_empty() {
            f.write_str(TABLE_HEADER)?;
            for record in doc.market_insights.values() {
                writeln!(
                    f,
                    "| {} | {} | {} | {} |",
                    OrNa(record.title.as_ref()),
                    OrNa(record.size_2024_billion_usd.as_ref()),
                    OrNa(record.cagr_percent.as_ref()),
                    ProjectionCell(record),
                )?;
            }
            f.write_str("\n")?;
        }

        if !doc.trends.is_empty() {
            f.write_str(
                "## 💡 Tendências Chave e Foco Estratégico\n\n\
                 A análise de mercado aponta para as seguintes tendências que devem guiar o \
                 desenvolvimento do ComunicaPro:\n",
            )?;
            for (i, trend) in doc.trends.iter().enumerate() {
                writeln!(f, "{}. **{trend}**", i + 1)?;
            }
            f.write_str("\n")?;
        }

        if !doc.advanced_feature_focus.is_empty() {
            f.write_str(
                "## 🚀 Próximos Recursos Avançados (Alinhamento com o Mercado)\n\n\
                 Para manter a competitividade, os esforços de desenvolvimento devem se \
                 concentrar em:\n",
            )?;
            for feature in &doc.advanced_feature_focus {
                writeln!(f, "- {feature}")?;
            }
            f.write_str("\n")?;
        }

        Ok(())
    }
}

/// Render the market analysis Markdown for `doc`.
#[must_use]
pub fn render_market_analysis(doc: &MarketInsightsDocument) -> String {
    MarketAnalysis(doc).to_string()
}
