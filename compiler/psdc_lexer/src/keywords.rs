//! Reserved-word lookup.
//!
//! Identifiers are matched case-insensitively: the scanner lowercases the
//! word before calling [`lookup`]. Accented keywords also have an unaccented
//! spelling (`début`/`debut`).

use psdc_ir::TokenKind;

/// Look up a reserved word by its lowercase text.
pub(crate) fn lookup(lowercase: &str) -> Option<TokenKind> {
    let kind = match lowercase {
        "alors" => TokenKind::Then,
        "booléen" | "booleen" => TokenKind::Boolean,
        "caractère" | "caractere" => TokenKind::Character,
        "chaîne" | "chaine" => TokenKind::StringType,
        "constante" => TokenKind::Constant,
        "début" | "debut" => TokenKind::Begin,
        "délivre" | "delivre" => TokenKind::Returns,
        "écrire" | "ecrire" => TokenKind::Write,
        "ent" => TokenKind::Trunc,
        "entier" => TokenKind::Integer,
        "et" => TokenKind::And,
        "faire" => TokenKind::Do,
        "faux" => TokenKind::False,
        "fin" => TokenKind::End,
        "fin_pour" => TokenKind::EndFor,
        "fin_selon" => TokenKind::EndSwitch,
        "fin_si" => TokenKind::EndIf,
        "fin_tant_que" => TokenKind::EndWhile,
        "fonction" => TokenKind::Function,
        "lire" => TokenKind::Read,
        "non" => TokenKind::Not,
        "or" => TokenKind::Or,
        "pour" => TokenKind::For,
        "procédure" | "procedure" => TokenKind::Procedure,
        "programme" => TokenKind::Program,
        "quand" => TokenKind::When,
        "quand_autre" => TokenKind::WhenOther,
        "réel" | "reel" => TokenKind::RealType,
        "retourne" => TokenKind::Return,
        "selon" => TokenKind::Switch,
        "si" => TokenKind::If,
        "sinon" => TokenKind::Else,
        "sinon_si" => TokenKind::ElseIf,
        "sortie" => TokenKind::Out,
        "structure" => TokenKind::Structure,
        "tableau" => TokenKind::Array,
        "tant_que" => TokenKind::While,
        "type" => TokenKind::Type,
        "vrai" => TokenKind::True,
        "xor" => TokenKind::Xor,
        _ => return None,
    };
    Some(kind)
}
