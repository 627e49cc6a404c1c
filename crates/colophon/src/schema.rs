//! The metadata schema and annotation prompt sent to the OCR provider.
//!
//! The provider runs a structured-output pass over the recognized document and
//! is constrained to this schema; the field descriptions double as extraction
//! instructions, so their wording matters as much as their types.

use serde_json::{Value, json};

/// Name under which the schema is registered in the response format envelope.
const SCHEMA_NAME: &str = "document_metadata";

/// The six output fields with their extraction guidance.
const FIELDS: [(&str, &str); 6] = [
    (
        "bibliographical_title",
        "The bibliographical title of the text, usually found in the initial pages",
    ),
    (
        "author",
        "The author of this document, usually found in the earlier pages",
    ),
    (
        "publisher",
        "The publication house(s) or entities of this document, found in the earlier pages",
    ),
    (
        "publication_year",
        "The year of publication of this document, usually found in the earlier pages near the publisher info",
    ),
    (
        "description",
        "A description encompassing the title, author, and publisher in 2-3 lines",
    ),
    (
        "summary",
        "A comprehensive ~200 word summary of the document covering its main themes, arguments, and significance",
    ),
];

/// Fixed instruction accompanying the schema on every annotation request.
pub const EXTRACTION_PROMPT: &str = r#"You are a document analyser whose job is to analyse all pages of the document to provide the following information (below given is their details and the format in which you have to return this information):

{
  "bibliographical_title": "string" // This implies the bibliographical title of the text, usually can be found in the initial pages
  "author": "string", // The author of this document, usually found in the earlier pages in the document
  "publisher": "string", // The publication house(s) or entities of this document, which can be found in the earlier pages of the document
  "publication_year": "string", // The year of publication, usually found in the earlier pages near the publisher info
  "description": "string", // The description which encompasses all of the above in 2-3 lines
  "summary": "string" // A comprehensive summary of approximately 200 words that covers the main themes, key arguments, subject matter, and significance of the document. The summary should give a reader a clear understanding of what the document is about, its scope, and its contribution to the field.
}

Make sure you find all the information from these pages and answer in the desired format only. If you are unable to find the information of author or publication, you can enter the most relevant information or the one which seems ideal in the case. However, you would be able to find both of these in the starting few pages of the document as defined above, if not, you can see the entire document for it. Remember, we just need the names in author and publisher, no leading statements or assumptions you make.

For the summary, read through the entire document and produce a ~200 word summary that captures:
- The main subject matter and themes
- Key arguments or findings
- The scope and structure of the work
- Its significance or contribution to the field

Return ONLY the JSON object with these six fields, nothing else."#;

/// JSON Schema describing the expected annotation object.
///
/// All six fields are string-typed and required; extra fields are rejected so
/// the provider cannot smuggle content past the declared shape.
pub fn metadata_json_schema() -> Value {
    let mut properties = serde_json::Map::new();
    let mut required = Vec::with_capacity(FIELDS.len());

    for (name, description) in FIELDS {
        properties.insert(
            name.to_string(),
            json!({ "type": "string", "description": description }),
        );
        required.push(Value::String(name.to_string()));
    }

    json!({
        "type": "object",
        "properties": properties,
        "required": required,
        "additionalProperties": false,
    })
}

/// The structured-output envelope the provider expects in
/// `document_annotation_format`.
pub fn metadata_response_format() -> Value {
    json!({
        "type": "json_schema",
        "json_schema": {
            "name": SCHEMA_NAME,
            "strict": true,
            "schema": metadata_json_schema(),
        },
    })
}
