//! Printable-document generation for a single recipe.

use crate::types::Recipe;
use crate::view::rating_summary;

/// Build a self-contained printable HTML document: title, metadata line,
/// description, ingredient list, step list, and rating summary. The
/// caller hands the result to whatever print flow the platform offers.
pub fn printable_document(recipe: &Recipe) -> String {
    let title = escape_html(&recipe.title);
    let description = escape_html(&recipe.description);

    let ingredients: String = recipe
        .ingredients
        .iter()
        .map(|i| format!("<li>{}</li>", escape_html(i)))
        .collect();
    let steps: String = recipe
        .steps
        .iter()
        .map(|s| format!("<li>{}</li>", escape_html(s)))
        .collect();

    let rating_line = if recipe.rating_count > 0 {
        rating_summary(recipe)
    } else {
        "No ratings yet.".to_string()
    };

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="UTF-8" />
  <title>{title} - Recipe</title>
  <style>
    body {{
      font-family: system-ui, -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
      padding: 24px;
      color: #111827;
      line-height: 1.5;
    }}
    h1 {{
      margin-top: 0;
      font-size: 1.8rem;
    }}
    .meta {{
      margin: 8px 0 16px;
      font-size: 0.9rem;
      color: #4b5563;
    }}
    h2 {{
      font-size: 1.1rem;
      margin-top: 18px;
      margin-bottom: 6px;
    }}
    ul, ol {{
      margin-top: 4px;
      padding-left: 18px;
    }}
    .section {{
      margin-bottom: 12px;
    }}
    .rating {{
      margin-top: 4px;
      font-size: 0.9rem;
      color: #6b7280;
    }}
  </style>
</head>
<body>
  <h1>{title}</h1>
  <div class="meta">
    Type: {recipe_type} · Difficulty: {difficulty} · Prep: {prep} mins · Cook: {cook} mins
  </div>
  <div class="section">
    <h2>Description</h2>
    <p>{description}</p>
  </div>
  <div class="section">
    <h2>Ingredients</h2>
    <ul>{ingredients}</ul>
  </div>
  <div class="section">
    <h2>Steps</h2>
    <ol>{steps}</ol>
  </div>
  <div class="section rating">
    {rating_line}
  </div>
</body>
</html>"#,
        recipe_type = recipe.recipe_type,
        difficulty = escape_html(&recipe.difficulty),
        prep = crate::form::fmt_minutes(recipe.prep_time),
        cook = crate::form::fmt_minutes(recipe.cook_time),
    )
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
