//! Table session
//!
//! 扫码进来的深链接落成一个会话: 哪家餐厅, 几号桌。链接里
//! 缺桌号时拿 tableId 去服务器补全。

use serde::{Deserialize, Serialize};

use crate::{ClientError, ClientResult, HttpClient};

/// Where the customer is sitting, resolved from a scanned deep link
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TableSession {
    pub restaurant_id: String,
    pub table_number: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restaurant_name: Option<String>,
}

/// Raw query parameters of a scanned link, before resolution
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeepLink {
    pub restaurant_id: Option<String>,
    pub table_id: Option<String>,
    pub table_number: Option<i32>,
    pub restaurant_name: Option<String>,
}

/// Parse the query string of a scanned QR link. Unknown parameters are
/// ignored; `undefined`/`null`/empty values count as absent.
pub fn parse_deep_link(link: &str) -> ClientResult<DeepLink> {
    let url = reqwest::Url::parse(link)
        .map_err(|e| ClientError::State(format!("invalid deep link: {e}")))?;

    let mut deep = DeepLink::default();
    for (key, value) in url.query_pairs() {
        match key.as_ref() {
            "restaurantId" => deep.restaurant_id = present(&value),
            "tableId" => deep.table_id = present(&value),
            "tableNumber" => deep.table_number = value.parse().ok(),
            "restaurantName" => deep.restaurant_name = present(&value),
            _ => {}
        }
    }
    Ok(deep)
}

fn present(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed == "undefined" || trimmed == "null" {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Build the link a table QR encodes. Inverse of [`parse_deep_link`].
pub fn build_deep_link(
    app_base: &str,
    table_id: &str,
    restaurant_id: &str,
    table_number: i32,
    restaurant_name: &str,
) -> ClientResult<String> {
    let mut url = reqwest::Url::parse(app_base)
        .map_err(|e| ClientError::State(format!("invalid app base url: {e}")))?;
    url.query_pairs_mut()
        .append_pair("tableId", table_id)
        .append_pair("restaurantId", restaurant_id)
        .append_pair("tableNumber", &table_number.to_string())
        .append_pair("restaurantName", restaurant_name);
    Ok(url.to_string())
}

/// Resolve a deep link into a session.
///
/// With a prior session the link only moves the customer to another table:
/// the restaurant fields stay as they were and just `table_id`/`table_number`
/// are taken from the link (with a lookup to fill a missing number). Without
/// one, the link has to identify the restaurant itself.
pub async fn resolve_session(
    api: &HttpClient,
    link: &str,
    prior: Option<&TableSession>,
) -> ClientResult<TableSession> {
    let deep = parse_deep_link(link)?;

    if let Some(prior) = prior {
        let table_number = match deep.table_number {
            Some(number) => number,
            None => {
                let Some(table_id) = deep.table_id.as_deref() else {
                    return Err(ClientError::State(
                        "deep link carries neither a table number nor a table id".to_string(),
                    ));
                };
                api.table(table_id).await?.number
            }
        };
        return Ok(TableSession {
            restaurant_id: prior.restaurant_id.clone(),
            restaurant_name: prior.restaurant_name.clone(),
            table_id: deep.table_id,
            table_number,
        });
    }

    match (deep.restaurant_id, deep.table_number) {
        (Some(restaurant_id), Some(table_number)) => Ok(TableSession {
            restaurant_id,
            table_number,
            table_id: deep.table_id,
            restaurant_name: deep.restaurant_name,
        }),
        (restaurant_id, _) => {
            let Some(table_id) = deep.table_id else {
                return Err(ClientError::State(
                    "deep link carries neither a table number nor a table id".to_string(),
                ));
            };
            let table = api.table(&table_id).await?;
            let restaurant_id = restaurant_id.or(table.restaurant_id).ok_or_else(|| {
                ClientError::State("deep link does not identify a restaurant".to_string())
            })?;
            Ok(TableSession {
                restaurant_id,
                table_number: table.number,
                table_id: Some(table_id),
                restaurant_name: deep.restaurant_name,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_link_parses_every_field() {
        let deep = parse_deep_link(
            "https://order.example/t?tableId=t9&restaurantId=r1&tableNumber=4&restaurantName=Golden%20Wok",
        )
        .unwrap();
        assert_eq!(deep.restaurant_id.as_deref(), Some("r1"));
        assert_eq!(deep.table_id.as_deref(), Some("t9"));
        assert_eq!(deep.table_number, Some(4));
        assert_eq!(deep.restaurant_name.as_deref(), Some("Golden Wok"));
    }

    #[test]
    fn junk_values_count_as_absent() {
        let deep = parse_deep_link(
            "https://order.example/t?restaurantId=undefined&tableId=&tableNumber=abc&restaurantName=null",
        )
        .unwrap();
        assert_eq!(deep, DeepLink::default());
    }

    #[test]
    fn non_url_input_is_a_state_error() {
        assert!(matches!(
            parse_deep_link("not a url"),
            Err(ClientError::State(_))
        ));
    }

    #[tokio::test]
    async fn prior_session_keeps_its_restaurant_on_rescan() {
        // Table number is in the link, so no lookup is needed.
        let api = crate::ClientConfig::new("http://127.0.0.1:0").build_http_client();
        let prior = TableSession {
            restaurant_id: "r1".into(),
            table_number: 1,
            table_id: Some("t1".into()),
            restaurant_name: Some("Golden Wok".into()),
        };

        let link = "https://order.example/t?tableId=t2&restaurantId=r2&tableNumber=2&restaurantName=Other";
        let session = resolve_session(&api, link, Some(&prior)).await.unwrap();

        assert_eq!(session.restaurant_id, "r1");
        assert_eq!(session.restaurant_name.as_deref(), Some("Golden Wok"));
        assert_eq!(session.table_id.as_deref(), Some("t2"));
        assert_eq!(session.table_number, 2);
    }

    #[test]
    fn built_links_parse_back() {
        let link = build_deep_link("http://localhost:8080", "t9", "r1", 4, "Golden Wok").unwrap();
        let deep = parse_deep_link(&link).unwrap();
        assert_eq!(deep.table_id.as_deref(), Some("t9"));
        assert_eq!(deep.restaurant_id.as_deref(), Some("r1"));
        assert_eq!(deep.table_number, Some(4));
        assert_eq!(deep.restaurant_name.as_deref(), Some("Golden Wok"));
    }
}
