/// Days covered by a sales report.
pub const SALES_WINDOW_DAYS: u32 = 7;

const SALES_KEYWORDS: &[&str] = &["sales", "ventas"];
const STOCK_KEYWORDS: &[&str] = &["stock"];

/// What an incoming message is asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Sales report over [`SALES_WINDOW_DAYS`].
    Sales,
    /// Current inventory.
    Stock,
    /// Anything else; answered by the AI provider.
    Default,
}

impl Intent {
    /// Keyword match on the lowercased text. Sales keywords are checked before
    /// stock, so a message mentioning both is a sales request.
    pub fn detect(text: &str) -> Self {
        let lowered = text.to_lowercase();
        let contains_any = |keywords: &[&str]| keywords.iter().any(|k| lowered.contains(k));

        if contains_any(SALES_KEYWORDS) {
            Intent::Sales
        } else if contains_any(STOCK_KEYWORDS) {
            Intent::Stock
        } else {
            Intent::Default
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Sales => "sales",
            Intent::Stock => "stock",
            Intent::Default => "default",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_sales_in_english_and_spanish() {
        assert_eq!(Intent::detect("How many sales did I have today?"), Intent::Sales);
        assert_eq!(Intent::detect("¿Cuántas ventas tuve?"), Intent::Sales);
    }

    #[test]
    fn matching_ignores_case() {
        assert_eq!(Intent::detect("SALES REPORT"), Intent::Sales);
        assert_eq!(Intent::detect("Ventas de la semana"), Intent::Sales);
        assert_eq!(Intent::detect("STOCK?"), Intent::Stock);
    }

    #[test]
    fn detects_stock() {
        assert_eq!(Intent::detect("Check stock please"), Intent::Stock);
    }

    #[test]
    fn sales_wins_over_stock() {
        assert_eq!(Intent::detect("stock and sales"), Intent::Sales);
    }

    #[test]
    fn matches_substrings_not_words() {
        assert_eq!(Intent::detect("wholesales numbers"), Intent::Sales);
        assert_eq!(Intent::detect("restocking soon?"), Intent::Stock);
    }

    #[test]
    fn everything_else_is_default() {
        assert_eq!(Intent::detect("Tell me a joke"), Intent::Default);
        assert_eq!(Intent::detect(""), Intent::Default);
        assert_eq!(Intent::detect("   "), Intent::Default);
        assert_eq!(Intent::detect("sale"), Intent::Default);
    }
}
