//! Static needs-analysis report shown in the report viewer.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoverageSlice {
    pub label: &'static str,
    pub amount: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelinePoint {
    pub year: &'static str,
    pub coverage: u64,
    pub need: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortfolioSlice {
    pub category: &'static str,
    pub amount: u64,
    pub percentage: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductRecommendation {
    pub name: &'static str,
    pub coverage_amount: u64,
    pub term_years: u32,
    pub monthly_premium: u64,
    pub rationale: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NeedsReport {
    pub client_id: String,
    pub client_name: String,
    pub protection_score: u8,
    pub current_coverage: u64,
    pub coverage_gap: u64,
    pub recommended_coverage: u64,
    pub coverage_breakdown: [CoverageSlice; 3],
    pub timeline: [TimelinePoint; 5],
    pub portfolio: [PortfolioSlice; 4],
    pub recommendation: ProductRecommendation,
}

impl NeedsReport {
    /// The demo report; every client sees the same figures.
    pub fn sample(client_id: &str, client_name: &str) -> Self {
        Self {
            client_id: client_id.to_owned(),
            client_name: client_name.to_owned(),
            protection_score: 45,
            current_coverage: 200_000,
            coverage_gap: 500_000,
            recommended_coverage: 700_000,
            coverage_breakdown: [
                CoverageSlice {
                    label: "Current Coverage",
                    amount: 200_000,
                },
                CoverageSlice {
                    label: "Coverage Gap",
                    amount: 500_000,
                },
                CoverageSlice {
                    label: "Recommended Coverage",
                    amount: 700_000,
                },
            ],
            timeline: [
                TimelinePoint {
                    year: "2024",
                    coverage: 200_000,
                    need: 700_000,
                },
                TimelinePoint {
                    year: "2029",
                    coverage: 200_000,
                    need: 750_000,
                },
                TimelinePoint {
                    year: "2034",
                    coverage: 200_000,
                    need: 800_000,
                },
                TimelinePoint {
                    year: "2039",
                    coverage: 200_000,
                    need: 850_000,
                },
                TimelinePoint {
                    year: "2044",
                    coverage: 0,
                    need: 900_000,
                },
            ],
            portfolio: [
                PortfolioSlice {
                    category: "Life Insurance",
                    amount: 200_000,
                    percentage: 20,
                },
                PortfolioSlice {
                    category: "Investments",
                    amount: 300_000,
                    percentage: 30,
                },
                PortfolioSlice {
                    category: "Savings",
                    amount: 200_000,
                    percentage: 20,
                },
                PortfolioSlice {
                    category: "Real Estate",
                    amount: 300_000,
                    percentage: 30,
                },
            ],
            recommendation: ProductRecommendation {
                name: "20-Year Term Life Insurance",
                coverage_amount: 500_000,
                term_years: 20,
                monthly_premium: 45,
                rationale: "A 20-year term policy with $500,000 coverage would provide adequate \
                            protection for your family's needs.",
            },
        }
    }
}
