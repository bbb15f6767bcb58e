use crate::models::InfoMessage;

/// Render the fixed-template summary line
pub fn render(info: &InfoMessage) -> String {
    info.get_message()
}
