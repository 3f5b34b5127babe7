//! Daily trend digest from `daily_trends.json`.

use std::fmt;

use chrono::NaiveDate;
use dm_core::entities::DailyTrendsDocument;

use crate::cell::OrNa;

/// [`fmt::Display`] adapter rendering a [`DailyTrendsDocument`].
///
/// `today` stands in for a missing document date.
pub struct DailySummary<'a> {
    pub doc: &'a DailyTrendsDocument,
    pub today: NaiveDate,
}

impl fmt::Display for DailySummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let today = self.today.format("%Y-%m-%d");
        if self.doc.trends.is_empty() {
            return write!(
                f,
                "# Resumo Diário de Tendências ({today})\n\n\
                 Nenhuma nova tendência significativa identificada hoje."
            );
        }

        match self.doc.date.as_deref() {
            Some(date) => write!(f, "# Resumo Diário de Tendências ({date})\n\n")?,
            None => write!(f, "# Resumo Diário de Tendências ({today})\n\n")?,
        }
        f.write_str(
            "Este relatório consolida as principais tendências de comunicação e percepção \
             identificadas na análise diária de dados.\n\n",
        )?;

        for trend in &self.doc.trends {
            write!(
                f,
                "## {} ({})\n\
                 **Métrica Chave:** {}\n\
                 **Valor:** {} {}\n\
                 **Descrição:** {}\n\n",
                OrNa(trend.name.as_ref()),
                OrNa(trend.vak_type.as_ref()),
                OrNa(trend.metric.as_ref()),
                OrNa(trend.value.as_ref()),
                OrNa(trend.unit.as_ref()),
                OrNa(trend.description.as_ref()),
            )?;
        }

        f.write_str("---\n\n*Relatório gerado automaticamente pelo `dialoga daily-summary`.*")
    }
}

/// Render the daily trend digest for `doc`.
#[must_use]
pub fn render_daily_summary(doc: &DailyTrendsDocument, today: NaiveDate) -> String {
    DailySummary { doc, today }.to_string()
}
