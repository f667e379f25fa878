//! Fixed report wording per locale.

use simucredito_shared::config::ReportLocale;

/// Every literal printed on a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLabels {
    /// Report title.
    pub title: &'static str,
    /// Prefix of the client detail line.
    pub client: &'static str,
    /// Prefix of the property detail line.
    pub property: &'static str,
    /// Prefix of the generation date line.
    pub date: &'static str,
    /// Shown when a name is missing.
    pub not_available: &'static str,
    /// `chrono` format string for the generation date.
    pub date_format: &'static str,

    /// Summary section heading.
    pub summary_heading: &'static str,
    /// Summary table columns.
    pub summary_columns: [&'static str; 2],
    /// Summary rows: property value, state contribution, down payment, financed amount.
    pub summary_rows: [&'static str; 4],

    /// Indicators section heading.
    pub indicators_heading: &'static str,
    /// Indicators table columns.
    pub indicators_columns: [&'static str; 2],
    /// Indicator rows: monthly payment, TCEA, COK, VAN, TIR, total interest.
    pub indicator_rows: [&'static str; 6],

    /// Amortization section heading.
    pub amortization_heading: &'static str,
    /// Amortization header cells in column order.
    pub amortization_columns: [&'static str; 14],
    /// Printed when a row has no grace period.
    pub no_grace: &'static str,

    /// Word before the page number in the footer.
    pub page: &'static str,
    /// Word between the page number and the page total.
    pub of: &'static str,
    /// Footer disclaimer line.
    pub disclaimer: &'static str,
}

impl ReportLabels {
    /// Spanish (Peru) wording.
    #[must_use]
    pub const fn es_pe() -> Self {
        Self {
            title: "Simulación de Crédito Hipotecario",
            client: "Cliente",
            property: "Propiedad",
            date: "Fecha",
            not_available: "N/A",
            date_format: "%d/%m/%Y",
            summary_heading: "Resumen de la Operación",
            summary_columns: ["Concepto", "Monto"],
            summary_rows: [
                "Valor Inmueble",
                "Aporte del Estado",
                "Cuota Inicial",
                "Monto Financiado",
            ],
            indicators_heading: "Indicadores Clave",
            indicators_columns: ["Indicador", "Valor"],
            indicator_rows: [
                "Cuota Mensual Total",
                "TCEA",
                "COK",
                "VAN",
                "TIR",
                "Total Intereses",
            ],
            amortization_heading: "Tabla de Amortización",
            amortization_columns: [
                "N° Cuota",
                "TEM",
                "Plazo de Gracia",
                "Saldo Inicial",
                "Interés",
                "Cuota",
                "Amortización",
                "Seguro Desgrav.",
                "Seguro Riesgo",
                "Comisiones",
                "Gastos Adm.",
                "Portes",
                "Saldo Final",
                "Flujo",
            ],
            no_grace: "Sin gracia",
            page: "Página",
            of: "de",
            disclaimer: "Cálculos basados en el método francés vencido ordinario con meses de 30 días.",
        }
    }

    /// English wording.
    #[must_use]
    pub const fn en() -> Self {
        Self {
            title: "Mortgage Loan Simulation",
            client: "Client",
            property: "Property",
            date: "Date",
            not_available: "N/A",
            date_format: "%Y-%m-%d",
            summary_heading: "Operation Summary",
            summary_columns: ["Item", "Amount"],
            summary_rows: [
                "Property Value",
                "State Contribution",
                "Down Payment",
                "Financed Amount",
            ],
            indicators_heading: "Key Indicators",
            indicators_columns: ["Indicator", "Value"],
            indicator_rows: [
                "Total Monthly Payment",
                "TCEA",
                "COK",
                "NPV",
                "IRR",
                "Total Interest",
            ],
            amortization_heading: "Amortization Schedule",
            amortization_columns: [
                "No.",
                "TEM",
                "Grace Period",
                "Opening Balance",
                "Interest",
                "Payment",
                "Principal",
                "Life Ins.",
                "Property Ins.",
                "Commissions",
                "Admin. Costs",
                "Postage",
                "Closing Balance",
                "Cash Flow",
            ],
            no_grace: "No grace period",
            page: "Page",
            of: "of",
            disclaimer: "Calculations use the French method with ordinary arrears and 30-day months.",
        }
    }

    /// Wording for a configured locale.
    #[must_use]
    pub const fn for_locale(locale: ReportLocale) -> Self {
        match locale {
            ReportLocale::EsPe => Self::es_pe(),
            ReportLocale::En => Self::en(),
        }
    }

    /// `Página 2 de 7`.
    #[must_use]
    pub fn page_counter(&self, number: usize, total: usize) -> String {
        format!("{} {number} {} {total}", self.page, self.of)
    }

    /// `Cliente: Ana Torres`, falling back to `N/A`.
    #[must_use]
    pub fn detail(&self, prefix: &str, value: Option<&str>) -> String {
        format!("{prefix}: {}", value.unwrap_or(self.not_available))
    }
}

impl Default for ReportLabels {
    fn default() -> Self {
        Self::es_pe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_counter_spanish() {
        assert_eq!(ReportLabels::es_pe().page_counter(2, 7), "Página 2 de 7");
    }

    #[test]
    fn test_detail_falls_back_to_not_available() {
        let labels = ReportLabels::es_pe();
        assert_eq!(labels.detail(labels.client, None), "Cliente: N/A");
        assert_eq!(
            labels.detail(labels.property, Some("Los Olivos")),
            "Propiedad: Los Olivos"
        );
    }

    #[test]
    fn test_locales_differ_in_grace_placeholder() {
        assert_eq!(ReportLabels::for_locale(ReportLocale::EsPe).no_grace, "Sin gracia");
        assert_eq!(ReportLabels::for_locale(ReportLocale::En).no_grace, "No grace period");
    }
}
