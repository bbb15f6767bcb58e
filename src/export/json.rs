use crate::error::Result;
use crate::models::InfoMessage;

/// Render a summary as a compact JSON object
pub fn render(info: &InfoMessage) -> Result<String> {
    Ok(serde_json::to_string(info)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_json() {
        let info = InfoMessage::new("Running", 1.0, 9.75, 9.75, 699.75);
        let json = render(&info).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["training_type"], "Running");
        assert_eq!(value["distance"], 9.75);
        assert_eq!(value["calories"], 699.75);
        assert!(!json.contains('\n'));
    }
}
