//! Terminal rendering of the display models.

use ladle_core::{RecipeCard, RecipeDetailView, VideoView};

pub fn print_cards(cards: &[RecipeCard]) {
    if cards.is_empty() {
        println!("No recipes match your filters.");
        return;
    }
    for card in cards {
        println!("{}  [{}]", card.title, card.id);
        println!(
            "  {} · {} · {} · {}",
            card.difficulty, card.recipe_type, card.total_time, card.rating
        );
        println!("  {}", card.description);
        println!();
    }
}

pub fn print_detail(detail: &RecipeDetailView) {
    println!("{}  [{}]", detail.title, detail.id);
    println!(
        "{} · {} · {} · {} · {}",
        detail.difficulty, detail.recipe_type, detail.prep_time, detail.cook_time, detail.rating
    );
    println!();
    println!("{}", detail.description);

    println!();
    println!("Ingredients");
    for ingredient in &detail.ingredients {
        println!("  - {ingredient}");
    }

    println!();
    println!("Steps");
    for (index, step) in detail.steps.iter().enumerate() {
        println!("  {}. {}", index + 1, step);
    }

    println!();
    println!("Rating & Reviews");
    println!("  {}", detail.rating_summary);
    if detail.reviews.is_empty() {
        println!("  No reviews yet.");
    } else {
        for review in &detail.reviews {
            match &review.text {
                Some(text) => println!("  {} – {}", review.stars, text),
                None => println!("  {}", review.stars),
            }
        }
    }

    if let Some(video) = &detail.video {
        println!();
        match video {
            VideoView::Embed(url) => println!("Cooking video: {url}"),
            VideoView::Link(url) => println!("Watch cooking video: {url}"),
        }
    }
}
