use serde::Serialize;
use utoipa::ToSchema;

/// Page number from the raw `page` query value. Anything that is not a
/// positive integer falls back to the first page.
pub fn parse_page(raw: Option<&str>) -> u64 {
    raw.and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|p| *p >= 1)
        .unwrap_or(1)
}

/// Effective page after clamping a request against the result size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct PageWindow {
    #[schema(example = 1)]
    pub page: u64,
    #[schema(example = 2)]
    pub per_page: u64,
    #[schema(example = 5)]
    pub total: u64,
    #[schema(example = 3)]
    pub num_pages: u64,
}

impl PageWindow {
    /// Past-the-end requests land on the last page. An empty result is a
    /// single empty page.
    pub fn clamp(requested: u64, per_page: u64, total: u64) -> Self {
        let per_page = per_page.max(1);
        let num_pages = total.div_ceil(per_page).max(1);

        Self {
            page: requested.clamp(1, num_pages),
            per_page,
            total,
            num_pages,
        }
    }

    pub fn offset(&self) -> u64 {
        (self.page - 1) * self.per_page
    }

    pub fn has_next(&self) -> bool {
        self.page < self.num_pages
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }
}
