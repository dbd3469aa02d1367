use serde::{Deserialize, Serialize};

/// Represents a file object in the OpenAI Files API.
///
/// Records are only ever produced by the service. The assistant files
/// sub-resource returns sparser objects than `/files`, so everything except the
/// id falls back to a default when absent.
///
/// For more information check the official [openAI API documentation](https://platform.openai.com/docs/api-reference/files)
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct FileRecord {
    /// Unique ID of the file.
    pub id: String,

    /// The name of the file.
    #[serde(default)]
    pub filename: String,

    /// The size of the file in bytes.
    #[serde(default)]
    pub bytes: u64,

    /// The unix timestamp (seconds) at which the file was created.
    #[serde(default)]
    pub created_at: i64,

    /// The intended purpose of the file.
    #[serde(default)]
    pub purpose: String,

    /// The type of the object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object: Option<String>,
}

/// Represents the response of listing the files attached to an assistant.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct FileList {
    /// List of `FileRecord` objects each representing an attached file.
    pub data: Vec<FileRecord>,

    /// The type of the object returned by the API.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object: Option<String>,
}

/// Request body that attaches an uploaded file to an assistant.
#[derive(Serialize, Clone, Debug)]
pub struct AttachFile {
    /// The ID of the file to attach.
    pub file_id: String,
}

/// Represents the response of attaching a file to an assistant.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct AssistantFile {
    /// The ID of the attached file.
    pub id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub object: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,

    /// The assistant the file is now attached to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assistant_id: Option<String>,
}

/// Represents the response from the OpenAI API when a file is deleted or
/// detached successfully.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DeleteResponse {
    /// Unique ID of the file that was deleted.
    pub id: String,

    /// The type of the object returned by the API.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object: Option<String>,

    /// Flag indicating whether the file was deleted successfully.
    #[serde(default)]
    pub deleted: bool,
}
