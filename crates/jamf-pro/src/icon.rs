//! Self Service icon types.

use serde::{Deserialize, Serialize};

jamf_pro_client::string_enum! {
    pub enum IconResolution {
        Original => "original",
        Px300 => "300",
        Px512 => "512",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Icon {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Options for downloading icon content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IconDownloadOptions {
    pub res: Option<IconResolution>,
    /// Scale factor; `0` returns the image at its stored size.
    pub scale: Option<String>,
}

impl IconDownloadOptions {
    pub(crate) fn to_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if let Some(res) = &self.res {
            params.push(("res".to_string(), res.to_string()));
        }
        if let Some(scale) = &self.scale {
            params.push(("scale".to_string(), scale.clone()));
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_download_params() {
        assert!(IconDownloadOptions::default().to_params().is_empty());

        let options = IconDownloadOptions {
            res: Some(IconResolution::Px512),
            scale: Some("0".into()),
        };
        assert_eq!(
            options.to_params(),
            vec![
                ("res".to_string(), "512".to_string()),
                ("scale".to_string(), "0".to_string()),
            ]
        );
    }

    #[test]
    fn test_icon_deserialization() {
        let icon: Icon = serde_json::from_str(
            r#"{"id": 1, "name": "icon.png", "url": "https://example.jamfcloud.com/icon?id=1"}"#,
        )
        .unwrap();
        assert_eq!(icon.id, Some(1));
        assert_eq!(icon.name.as_deref(), Some("icon.png"));
    }
}
