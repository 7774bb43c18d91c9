//! OpenAPI document for the two public routes.
//!
//! Hand-authored and deterministic: no I/O, no schema crates, just a JSON
//! value. Must be kept in sync with the validator and the route handlers.

use serde_json::{json, Value};

/// Build the OpenAPI 3.0 JSON document.
pub fn document() -> Value {
    json!({
        "openapi": "3.0.0",
        "info": {
            "title": "Tugas API",
            "version": "1.0.0",
            "description": "API for storing and listing task-assignment request records"
        },
        "paths": {
            "/api/requests": {
                "get": {
                    "summary": "Get data",
                    "responses": {
                        "200": {
                            "description": "Daftar semua data",
                            "content": {
                                "application/json": {
                                    "schema": {
                                        "type": "array",
                                        "items": { "$ref": "#/components/schemas/RequestRecord" }
                                    }
                                }
                            }
                        }
                    }
                }
            },
            "/api/upload": {
                "post": {
                    "summary": "Create data",
                    "requestBody": {
                        "required": true,
                        "content": {
                            "application/json": {
                                "schema": { "$ref": "#/components/schemas/RequestRecord" }
                            }
                        }
                    },
                    "responses": {
                        "200": {
                            "description": "Data tersimpan",
                            "content": {
                                "application/json": {
                                    "schema": {
                                        "type": "object",
                                        "properties": {
                                            "message": { "type": "string" },
                                            "id": { "type": "string" },
                                            "status": { "type": "string" }
                                        }
                                    }
                                }
                            }
                        },
                        "400": {
                            "description": "Payload tidak valid",
                            "content": {
                                "application/json": {
                                    "schema": {
                                        "type": "object",
                                        "properties": {
                                            "error": { "type": "string" },
                                            "code": { "type": "string" },
                                            "fields": {
                                                "type": "array",
                                                "items": { "type": "string" }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        },
        "components": {
            "schemas": {
                "RequestRecord": {
                    "type": "object",
                    "properties": {
                        "assignee": {
                            "type": "string",
                            "description": "Nama penerima tugas"
                        },
                        "deadline": {
                            "type": "string",
                            "description": "Batas waktu untuk menyelesaikan tugas"
                        },
                        "division": {
                            "type": "string",
                            "description": "Divisi yang mengirimkan permintaan"
                        },
                        "domain": {
                            "type": "string",
                            "description": "Domain terkait permintaan"
                        },
                        "link": {
                            "type": "string",
                            "description": "Link terkait permintaan"
                        },
                        "note": {
                            "type": "string",
                            "description": "Catatan tambahan"
                        },
                        "request_name": {
                            "type": "string",
                            "description": "Nama pengirim permintaan"
                        },
                        "status": {
                            "type": "string",
                            "description": "Status permintaan"
                        },
                        "tag": {
                            "type": "array",
                            "items": { "type": "string" },
                            "description": "Tag-tag terkait permintaan"
                        },
                        "list_input": {
                            "type": "array",
                            "items": {
                                "type": "object",
                                "properties": {
                                    "input": {
                                        "type": "string",
                                        "description": "Input"
                                    },
                                    "output": {
                                        "type": "string",
                                        "description": "Output yang ditampilkan akan muncul disini ketika memilih input"
                                    }
                                },
                                "required": ["input", "output"]
                            },
                            "description": "List input"
                        }
                    },
                    "required": [
                        "assignee",
                        "deadline",
                        "division",
                        "domain",
                        "link",
                        "note",
                        "request_name",
                        "status",
                        "tag",
                        "list_input"
                    ]
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describes_both_routes() {
        let doc = document();
        assert!(doc["paths"]["/api/requests"]["get"].is_object());
        assert!(doc["paths"]["/api/upload"]["post"].is_object());
    }

    #[test]
    fn schema_requires_all_ten_fields() {
        let doc = document();
        let required = doc["components"]["schemas"]["RequestRecord"]["required"]
            .as_array()
            .unwrap();
        assert_eq!(required.len(), 10);
        for f in ["assignee", "status", "tag", "list_input"] {
            assert!(required.iter().any(|v| v == f), "missing {f}");
        }
    }

    #[test]
    fn pair_elements_require_both_keys() {
        let doc = document();
        let required = doc["components"]["schemas"]["RequestRecord"]["properties"]["list_input"]
            ["items"]["required"]
            .as_array()
            .unwrap();
        assert_eq!(required, &[json!("input"), json!("output")]);
    }
}
