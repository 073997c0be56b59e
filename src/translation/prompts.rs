/*!
 * Prompt templates for Markdown translation.
 *
 * The instruction template pins down what the model must leave untouched;
 * changing the rules is a constant-string edit.
 */

/// Instruction template for Markdown translation.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    /// The template string with placeholders
    template: String,
}

impl PromptTemplate {
    /// The default instruction block for Markdown translation.
    pub const MARKDOWN_TRANSLATOR: &'static str = r#"You are a professional technical translator. Translate the following Markdown content into {target_language}.

Rules:
- Preserve all Markdown formatting and syntax exactly (headings, lists, tables, emphasis, links, front matter).
- Do NOT translate code blocks, inline code, URLs, or file paths.
- DO translate comments found inside code blocks.
- Translate only the human-readable text.
- Keep technical terms and proper nouns that have no established translation in their original language.
- Return only the translated Markdown, with no commentary, notes, or explanations."#;

    /// Create a new prompt template.
    pub fn new(template: &str) -> Self {
        Self {
            template: template.to_string(),
        }
    }

    /// Create the default Markdown translator template.
    pub fn markdown_translator() -> Self {
        Self::new(Self::MARKDOWN_TRANSLATOR)
    }

    /// Render the template with the given target language.
    pub fn render(&self, target_language: &str) -> String {
        self.template.replace("{target_language}", target_language)
    }
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self::markdown_translator()
    }
}

/// Build the full prompt for one chunk: rendered instructions followed by
/// the chunk text verbatim.
pub fn build_translation_prompt(text: &str, target_language: &str) -> String {
    let instructions = PromptTemplate::markdown_translator().render(target_language);
    format!("{}\n\n{}", instructions, text)
}
