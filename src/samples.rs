//! Sample markdown documents for testing and demonstration.
//!
//! Each sample exercises different document features.

/// Schema-documentation sample with headings, an attribute table, and a
/// fenced SQL block.
pub fn schema_sample() -> &'static str {
    r#"# Database Schema

## Users

Core account table. Every other entity hangs off of it.

| Column      | Type      | Constraints              |
|-------------|-----------|--------------------------|
| id          | INTEGER   | PRIMARY KEY              |
| email       | TEXT      | NOT NULL UNIQUE          |
| created_at  | TIMESTAMP | NOT NULL DEFAULT now()   |

```sql
CREATE TABLE users (
    id INTEGER PRIMARY KEY,
    email TEXT NOT NULL UNIQUE,
    created_at TIMESTAMP NOT NULL DEFAULT now()
);
```

## Events

Scheduled classes and socials.

| Column    | Type    | Constraints                    |
|-----------|---------|--------------------------------|
| id        | INTEGER | PRIMARY KEY                    |
| venue_id  | INTEGER | REFERENCES venues(id)          |
| starts_at | TIMESTAMP | NOT NULL                     |
"#
}

/// Sample whose fenced block is a box-drawing relationship diagram.
pub fn diagram_sample() -> &'static str {
    "# Relationships\n\n\
     ```\n\
     ┌───────────┐       ┌───────────┐\n\
     │   users   │ 1───* │  bookings │\n\
     └───────────┘       └───────────┘\n\
     ```\n\n\
     One user may hold many bookings.\n"
}

/// Minimal sample for unit testing.
pub fn minimal_sample() -> &'static str {
    "# Title\n\nBody text.\n"
}

/// Sample exercising every supported construct at once.
pub fn all_constructs_sample() -> &'static str {
    r#"# Heading 1

## Heading 2

### Heading 3

Paragraph with **bold**, *italic*, ~~struck~~ and `inline code`.

- Unordered item
- Another item

1. Ordered item
2. Another item

> A note about the schema.

| A | B |
|---|---|
| 1 | 2 |

```sql
SELECT 1;
```
"#
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_convert_to_nonempty_html() {
        let samples: Vec<(&str, &str)> = vec![
            ("schema", schema_sample()),
            ("diagram", diagram_sample()),
            ("minimal", minimal_sample()),
            ("all_constructs", all_constructs_sample()),
        ];

        for (name, md) in samples {
            let html = crate::markdown::to_html_fragment(md);
            assert!(
                !html.trim().is_empty(),
                "Sample '{}' should convert to non-empty HTML",
                name
            );
        }
    }
}
