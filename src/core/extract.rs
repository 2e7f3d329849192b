use crate::utils::error::{Result, ScoutError};
use scraper::{ElementRef, Html, Selector};

fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| ScoutError::SelectorError {
        selector: selector.to_string(),
        message: e.to_string(),
    })
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// 從 HTML 中擷取 (名稱, 價格文字) 配對。
///
/// Names and prices are matched by position and the shorter list wins:
/// three names with two prices yield two pairs. Nothing checks that the
/// n-th name and the n-th price belong to the same product, so pages whose
/// markup is not laid out in parallel will silently misalign.
pub fn extract(
    markup: &str,
    name_selector: &str,
    price_selector: &str,
) -> Result<Vec<(String, String)>> {
    let name_sel = parse_selector(name_selector)?;
    let price_sel = parse_selector(price_selector)?;

    let document = Html::parse_document(markup);

    let pairs = document
        .select(&name_sel)
        .zip(document.select(&price_sel))
        .map(|(name, price)| (element_text(name), element_text(price)))
        .collect();

    Ok(pairs)
}
