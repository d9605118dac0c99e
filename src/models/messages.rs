use serde::{Deserialize, Serialize};

use crate::models::Document;

/// Document payload of a client `update` frame. Only the editable fields
/// are taken from the client; `lastEditedBy`/`lastUpdated` are stamped by
/// the server and any client-supplied values are dropped during parsing.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DocumentUpdate {
    pub title: String,
    pub content: String,
}

/// Payload of a client `cursor` frame
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CursorUpdate {
    pub position: Option<i64>,
}

/// One `{user, cursor}` entry of a presence snapshot
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PresenceEntry {
    pub username: String,
    pub cursor: Option<i64>,
}

/// Payload of the `init` frame sent once after connect
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct InitPayload {
    pub document: Document,
    pub users: Vec<PresenceEntry>,
}

/// Payload of an `error` frame
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ErrorPayload {
    pub message: String,
}

/// Frames accepted from clients, `{"type": ..., "data": ...}` on the wire
#[derive(Serialize, Deserialize, Debug)]
#[serde(tag = "type", content = "data")]
pub enum ClientMessage {
    #[serde(rename = "update")]
    Update(DocumentUpdate),
    #[serde(rename = "cursor")]
    Cursor(CursorUpdate),
}

/// Frames sent to clients, `{"type": ..., "data": ...}` on the wire
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(tag = "type", content = "data")]
pub enum ServerMessage {
    #[serde(rename = "init")]
    Init(InitPayload),
    #[serde(rename = "update")]
    Update(Document),
    #[serde(rename = "presence")]
    Presence(Vec<PresenceEntry>),
    #[serde(rename = "error")]
    Error(ErrorPayload),
}

impl ServerMessage {
    /// Build an `error` frame
    pub fn error(message: impl Into<String>) -> Self {
        ServerMessage::Error(ErrorPayload {
            message: message.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_frames_parse_the_wire_format() {
        let frame: ClientMessage = serde_json::from_str(
            r#"{"type":"update","data":{"title":"Notes","content":"hello","lastEditedBy":"bob","lastUpdated":"2026-01-01 00:00:00"}}"#,
        )
        .unwrap();
        match frame {
            ClientMessage::Update(update) => {
                assert_eq!(update.title, "Notes");
                assert_eq!(update.content, "hello");
            }
            other => panic!("expected update frame, got {:?}", other),
        }

        let frame: ClientMessage =
            serde_json::from_str(r#"{"type":"cursor","data":{"position":7}}"#).unwrap();
        match frame {
            ClientMessage::Cursor(cursor) => assert_eq!(cursor.position, Some(7)),
            other => panic!("expected cursor frame, got {:?}", other),
        }
    }

    #[test]
    fn cursor_position_may_be_absent() {
        let frame: ClientMessage =
            serde_json::from_str(r#"{"type":"cursor","data":{}}"#).unwrap();
        match frame {
            ClientMessage::Cursor(cursor) => assert_eq!(cursor.position, None),
            other => panic!("expected cursor frame, got {:?}", other),
        }
    }

    #[test]
    fn unknown_frame_types_are_rejected() {
        assert!(serde_json::from_str::<ClientMessage>(r#"{"type":"ping","data":{}}"#).is_err());
    }

    #[test]
    fn server_frames_use_a_data_wrapper() {
        let frame = ServerMessage::Presence(vec![PresenceEntry {
            username: "alice".to_string(),
            cursor: Some(3),
        }]);
        let value: serde_json::Value = serde_json::to_value(&frame).unwrap();
        assert_eq!(value["type"], "presence");
        assert_eq!(value["data"][0]["username"], "alice");
        assert_eq!(value["data"][0]["cursor"], 3);
    }
}
