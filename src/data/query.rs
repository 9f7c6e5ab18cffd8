use reqwest::Url;

use crate::error::{QuadrantError, QuadrantResult};

const NUMERIC_FIELDS_FILTER: &str = "ReadOnlyField eq false and Hidden eq false and \
     (TypeAsString eq 'Number' or TypeAsString eq 'Currency' or TypeAsString eq 'Decimal')";
const VISIBLE_LISTS_FILTER: &str = "Hidden eq false and BaseTemplate eq 100";

/// Parses the absolute URL of the SharePoint web hosting the lists.
pub fn parse_web_url(web_url: &str) -> QuadrantResult<Url> {
    let url = Url::parse(web_url.trim())
        .map_err(|e| QuadrantError::InvalidData(format!("invalid web url `{web_url}`: {e}")))?;
    if url.cannot_be_a_base() {
        return Err(QuadrantError::InvalidData(format!(
            "web url `{web_url}` cannot carry a path"
        )));
    }
    Ok(url)
}

/// Items query of one list: `Id` and `Title` first, then `fields` in order,
/// optionally narrowed to one item.
pub fn list_items_url(
    web_url: &Url,
    list_title: &str,
    fields: &[&str],
    item_id: Option<i64>,
) -> QuadrantResult<Url> {
    let mut url = list_url(web_url, list_title, "items")?;
    {
        let mut query = url.query_pairs_mut();
        query.append_pair("$select", &select_clause(fields));
        if let Some(id) = item_id {
            query.append_pair("$filter", &format!("Id eq {id}"));
        }
    }
    Ok(url)
}

/// Writable, visible numeric columns (`Number`, `Currency`, `Decimal`) of a list.
pub fn numeric_fields_url(web_url: &Url, list_title: &str) -> QuadrantResult<Url> {
    let mut url = list_url(web_url, list_title, "fields")?;
    url.query_pairs_mut()
        .append_pair("$filter", NUMERIC_FIELDS_FILTER)
        .append_pair("$select", "InternalName,Title")
        .append_pair("$orderby", "Title");
    Ok(url)
}

/// Visible generic lists of the web, ordered by title.
pub fn available_lists_url(web_url: &Url) -> QuadrantResult<Url> {
    let mut url = api_url(web_url, &["lists"])?;
    url.query_pairs_mut()
        .append_pair("$filter", VISIBLE_LISTS_FILTER)
        .append_pair("$select", "Id,Title")
        .append_pair("$orderby", "Title");
    Ok(url)
}

/// Reads the `ID` query parameter of a hosting page URL.
///
/// Values that are not integers are ignored so they never reach a filter.
#[must_use]
pub fn item_id_from_page_url(page_url: &str) -> Option<i64> {
    let url = Url::parse(page_url).ok()?;
    let raw = url
        .query_pairs()
        .find(|(key, _)| key == "ID")
        .map(|(_, value)| value.into_owned())?;
    match raw.trim().parse::<i64>() {
        Ok(id) => Some(id),
        Err(_) => {
            tracing::warn!(value = %raw, "ignoring non-integer ID page parameter");
            None
        }
    }
}

/// OData string literal body: single quotes are doubled.
#[must_use]
pub fn escape_odata_literal(value: &str) -> String {
    value.replace('\'', "''")
}

fn select_clause(fields: &[&str]) -> String {
    let mut selected: Vec<&str> = vec!["Id", "Title"];
    for field in fields {
        let field = field.trim();
        if !field.is_empty() && !selected.contains(&field) {
            selected.push(field);
        }
    }
    selected.join(",")
}

fn list_url(web_url: &Url, list_title: &str, leaf: &str) -> QuadrantResult<Url> {
    let by_title = format!("getbytitle('{}')", escape_odata_literal(list_title));
    api_url(web_url, &["lists", by_title.as_str(), leaf])
}

fn api_url(web_url: &Url, segments: &[&str]) -> QuadrantResult<Url> {
    let mut url = web_url.clone();
    url.set_query(None);
    url.set_fragment(None);
    url.path_segments_mut()
        .map_err(|()| {
            QuadrantError::InvalidData(format!("web url `{web_url}` cannot carry a path"))
        })?
        .pop_if_empty()
        .extend(["_api", "web"])
        .extend(segments);
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_clause_keeps_id_and_title_first_without_duplicates() {
        assert_eq!(
            select_clause(&["Resolvability", "Title", "Opportunity", "Resolvability"]),
            "Id,Title,Resolvability,Opportunity"
        );
    }

    #[test]
    fn odata_literal_doubles_quotes() {
        assert_eq!(escape_odata_literal("Bob's list"), "Bob''s list");
    }
}
