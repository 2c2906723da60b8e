//! Translation prompt template

/// Opening delimiter of the text to translate
pub const OPEN_TAG: &str = "<texto>";

/// Closing delimiter of the text to translate
pub const CLOSE_TAG: &str = "</texto>";

const INSTRUCTIONS: &str = r#"Você é um sistema de tradução automatizada. Sua única função é traduzir o conteúdo que está dentro da tag <texto> para um bom português brasileiro idiomático e preciso.

    REGRAS RÍGIDAS E OBRIGATÓRIAS:

    1.  PRESERVAÇÃO TOTAL DA ESTRUTURA: Mantenha 100% da estrutura do texto original. 

        - Se for **HTML**, todas as tags, atributos (como class, id, href), e a hierarquia do DOM devem permanecer absolutamente intactas. Traduza apenas o conteúdo textual visível ao usuário.

        - Se houver **CÓDIGO** (JavaScript, Python ou de qualquer outra linguagem de programação, marcação e estilo), a sintaxe do código, a indentação e a lógica devem ser preservadas sem nenhuma alteração. Traduza exclusivamente os textos dentro de comentários e strings.

    2.  SAÍDA ESTRITAMENTE LIMPA: Sua resposta deve conter **apenas e tão somente** o conteúdo traduzido. É proibido adicionar qualquer texto introdutório, explicações, notas ou qualquer frase como "Aqui está a tradução:". A saída deve ser a tradução pura e direta.

    3.  FOCO NO CONTEÚDO DELIMITADO: O único texto a ser traduzido é aquele que se encontra dentro da tag <texto> desconsiderando a propria tag <texto>. Ignore todo o resto."#;

/// Wrap `text` in the translation instructions.
///
/// The text is inserted verbatim between [`OPEN_TAG`] and [`CLOSE_TAG`], its
/// first line indented like the tags. Delimiter-like sequences inside it are
/// not escaped.
pub fn build_prompt(text: &str) -> String {
    format!("{INSTRUCTIONS}\n\n    {OPEN_TAG}\n\n    {text}\n\n    {CLOSE_TAG}")
}
