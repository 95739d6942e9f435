//! URL helpers for the ranking site

/// Un-paginated URL of the 2024 Best Chinese Universities Ranking
pub const BASE_URL: &str = "https://www.shanghairanking.cn/rankings/bcur/2024";

/// Builds the URL for one page of the ranking list
///
/// The site paginates with a plain `?page=N` query parameter; page numbers
/// start at 1.
///
/// # Example
/// ```
/// use shanghairanking_core::url::{build_page_url, BASE_URL};
/// let url = build_page_url(BASE_URL, 3);
/// assert_eq!(url, "https://www.shanghairanking.cn/rankings/bcur/2024?page=3");
/// ```
pub fn build_page_url(base: &str, page: usize) -> String {
    format!("{}?page={}", base, page)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_page_url_first_page() {
        let url = build_page_url(BASE_URL, 1);
        assert_eq!(
            url,
            "https://www.shanghairanking.cn/rankings/bcur/2024?page=1"
        );
    }

    #[test]
    fn test_build_page_url_custom_base() {
        let url = build_page_url("http://127.0.0.1:8080/rankings", 12);
        assert_eq!(url, "http://127.0.0.1:8080/rankings?page=12");
    }
}
