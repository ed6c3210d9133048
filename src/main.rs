use tracing_subscriber::EnvFilter;
use union_contacts::{text, ContactGrouper};

const EXAMPLE: &str = r#"
(contacts
  ("John" "john@gmail.com" "john@fb.com")
  ("Dan" "dan@gmail.com" "+1234567")
  ("john123" "+5412312" "john123@skype.com")
  ("john1985" "+5412312" "john@fb.com")
  ("Dan" "dan@gmail.com" "+1234567")
  ("dan@gmail.com" "dan@hotmail.com")
  ("john@gmail.com"))
"#;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let contacts = text::from_str(EXAMPLE)?;
    let groups = ContactGrouper::new().group(&contacts)?;
    println!("{groups}");

    for merged in groups.merge(&contacts) {
        println!("{}", merged.identifiers().join(", "));
    }
    Ok(())
}
