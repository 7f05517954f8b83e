// eBay search-results HTML extraction
use crate::model::{ParserError, RawRecord};
use scraper::{Html, Selector};

pub struct EbayParser;

impl EbayParser {
    pub fn new() -> Self {
        Self
    }

    pub fn parse(&self, html: &str) -> Result<Vec<RawRecord>, ParserError> {
        let document = Html::parse_document(html);

        let item_selector =
            Selector::parse("li.s-item").map_err(|e| ParserError::Selector(e.to_string()))?;
        let link_selector = Selector::parse("a.s-item__link")
            .map_err(|e| ParserError::Selector(e.to_string()))?;
        let title_selector = Selector::parse(".s-item__title")
            .map_err(|e| ParserError::Selector(e.to_string()))?;
        let price_selector = Selector::parse(".s-item__price")
            .map_err(|e| ParserError::Selector(e.to_string()))?;

        let mut records = Vec::new();

        for item in document.select(&item_selector) {
            let link_elem = item.select(&link_selector).next();
            let title_elem = item.select(&title_selector).next();
            let price_elem = item.select(&price_selector).next();

            let (Some(link_node), Some(title_node), Some(price_node)) =
                (link_elem, title_elem, price_elem)
            else {
                continue;
            };

            let title = title_node.text().collect::<Vec<_>>().join(" ").trim().to_string();
            let link = link_node.value().attr("href").unwrap_or("").to_string();
            let price = price_node.text().collect::<String>().trim().to_string();

            if link.is_empty() {
                continue;
            }

            records.push(RawRecord { title, price, link });
        }

        Ok(records)
    }
}

impl Default for EbayParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <ul>
          <li class="s-item">
            <a class="s-item__link" href="https://www.ebay.co.uk/itm/111?hash=abc">
              <span class="s-item__title">Job lot of 10 film cameras untested</span>
            </a>
            <span class="s-item__price">£45.00</span>
          </li>
          <li class="s-item">
            <a class="s-item__link" href="https://www.ebay.co.uk/itm/222">
              <span class="s-item__title">Shop on eBay</span>
            </a>
            <span class="s-item__price">£20.00</span>
          </li>
          <li class="s-item">
            <span class="s-item__title">No link on this one</span>
            <span class="s-item__price">£1.00</span>
          </li>
        </ul>
    "#;

    #[test]
    fn extracts_title_price_and_link() {
        let records = EbayParser::new().parse(PAGE).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].title, "Job lot of 10 film cameras untested");
        assert_eq!(records[0].price, "£45.00");
        assert_eq!(records[0].link, "https://www.ebay.co.uk/itm/111?hash=abc");
    }

    #[test]
    fn rows_missing_elements_are_skipped() {
        let records = EbayParser::new().parse(PAGE).unwrap();
        assert!(records.iter().all(|r| !r.link.is_empty()));
    }

    #[test]
    fn empty_page_yields_no_records() {
        assert!(EbayParser::new().parse("<html></html>").unwrap().is_empty());
    }
}
