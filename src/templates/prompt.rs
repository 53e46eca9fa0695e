/// MOSS prompt: the text between a colon prefix and the end-of-header marker
pub const MOSS_TEMPLATE: &str = ": {{text}}<eoh>\n:";
