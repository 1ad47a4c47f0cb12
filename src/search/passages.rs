//! Passage extraction with source citations

use std::fmt;

use crate::errors::RagChatError;
use crate::errors::Result;
use crate::search::types::QueryResponse;

/// A retrieved snippet attributed to its source document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Passage {
    pub text: String,
    pub source: String,
}

impl fmt::Display for Passage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (Source: {})", self.text, self.source)
    }
}

/// Join the first response set's items against its document list, in service order.
///
/// An empty response list yields no passages. A response without any response
/// set, or an item pointing past the end of the document list, is malformed.
pub fn extract_passages(response: &QueryResponse) -> Result<Vec<Passage>> {
    let set = response.response_set.first().ok_or_else(|| {
        RagChatError::MalformedResponse("response contains no response set".to_string())
    })?;

    set.response
        .iter()
        .map(|item| {
            let document = set.document.get(item.document_index).ok_or_else(|| {
                RagChatError::MalformedResponse(format!(
                    "document index {} out of range ({} documents)",
                    item.document_index,
                    set.document.len()
                ))
            })?;
            Ok(Passage {
                text: item.text.clone(),
                source: document.id.clone(),
            })
        })
        .collect()
}

/// Render passages as a blank-line separated block for the prompt
pub fn combine_passages(passages: &[Passage]) -> String {
    passages
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::types::Document;
    use crate::search::types::ResponseItem;
    use crate::search::types::ResponseSet;

    fn item(text: &str, document_index: usize) -> ResponseItem {
        ResponseItem {
            text: text.to_string(),
            score: 0.5,
            document_index,
        }
    }

    fn doc(id: &str) -> Document {
        Document { id: id.to_string() }
    }

    fn response(items: Vec<ResponseItem>, documents: Vec<Document>) -> QueryResponse {
        QueryResponse {
            response_set: vec![ResponseSet {
                response: items,
                document: documents,
            }],
        }
    }

    #[test]
    fn test_one_passage_per_item_in_service_order() {
        let response = response(
            vec![item("second doc text", 1), item("first doc text", 0), item("more", 1)],
            vec![doc("a.pdf"), doc("b.pdf")],
        );

        let passages = extract_passages(&response).unwrap();
        let rendered: Vec<String> = passages.iter().map(ToString::to_string).collect();

        assert_eq!(
            rendered,
            vec![
                "second doc text (Source: b.pdf)",
                "first doc text (Source: a.pdf)",
                "more (Source: b.pdf)",
            ]
        );
    }

    #[test]
    fn test_empty_response_list_yields_no_passages() {
        let response = response(vec![], vec![]);
        assert!(extract_passages(&response).unwrap().is_empty());
    }

    #[test]
    fn test_out_of_range_index_is_malformed() {
        let response = response(vec![item("orphan", 2)], vec![doc("only.pdf")]);
        let err = extract_passages(&response).unwrap_err();
        assert!(matches!(err, RagChatError::MalformedResponse(_)));
        assert!(err.to_string().contains("document index 2"));
    }

    #[test]
    fn test_missing_response_set_is_malformed() {
        let err = extract_passages(&QueryResponse::default()).unwrap_err();
        assert!(matches!(err, RagChatError::MalformedResponse(_)));
    }

    #[test]
    fn test_only_first_response_set_is_used() {
        let mut response = response(vec![item("kept", 0)], vec![doc("one")]);
        response.response_set.push(ResponseSet {
            response: vec![item("ignored", 0)],
            document: vec![doc("two")],
        });

        let passages = extract_passages(&response).unwrap();
        assert_eq!(passages.len(), 1);
        assert_eq!(passages[0].source, "one");
    }

    #[test]
    fn test_combine_passages() {
        let passages = vec![
            Passage {
                text: "alpha".to_string(),
                source: "x".to_string(),
            },
            Passage {
                text: "beta".to_string(),
                source: "y".to_string(),
            },
        ];
        assert_eq!(
            combine_passages(&passages),
            "alpha (Source: x)\n\nbeta (Source: y)"
        );
        assert_eq!(combine_passages(&[]), "");
    }
}
