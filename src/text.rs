//! A text format for contact lists.
//!
//! ```text
//! (contacts
//!   ("John" "john@gmail.com" "john@fb.com")
//!   ("Dan" "dan@gmail.com" "+1234567")
//!   ())
//! ```

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Lexpr(#[from] lexpr::parse::Error),

    #[error("Unexpected value type")]
    UnexpectedValueType,

    #[error("Unexpected symbol: {0}")]
    UnexpectedSymbol(String),
}

type Result<T> = std::result::Result<T, Error>;

pub fn from_str(text: &str) -> Result<Vec<Vec<String>>> {
    let expr = lexpr::from_str(text)?;

    parse_contact_list(&expr)
}

fn parse_list_with_head<'a>(head: &str, expr: &'a lexpr::Value) -> Result<&'a lexpr::Value> {
    let cons = expr.as_cons().ok_or(Error::UnexpectedValueType)?;
    let head_symbol = cons.car().as_symbol().ok_or(Error::UnexpectedValueType)?;
    if head_symbol != head {
        return Err(Error::UnexpectedSymbol(head_symbol.to_string()));
    }
    Ok(cons.cdr())
}

fn parse_contact_list(expr: &lexpr::Value) -> Result<Vec<Vec<String>>> {
    let entries = parse_list_with_head("contacts", expr)?;
    entries
        .list_iter()
        .ok_or(Error::UnexpectedValueType)?
        .map(parse_contact)
        .collect()
}

fn parse_contact(expr: &lexpr::Value) -> Result<Vec<String>> {
    // Has the form (<identifier-str> ...)
    expr.list_iter()
        .ok_or(Error::UnexpectedValueType)?
        .map(|identifier| {
            identifier
                .as_str()
                .map(str::to_string)
                .ok_or(Error::UnexpectedValueType)
        })
        .collect()
}
