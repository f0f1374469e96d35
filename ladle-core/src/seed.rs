//! The fixed starter recipes used when no stored data exists.

use serde_json::Map;

use crate::ids::generate_id;
use crate::types::{now_timestamp, Recipe, RecipeType};

struct SeedRecipe {
    title: &'static str,
    description: &'static str,
    ingredients: &'static [&'static str],
    steps: &'static [&'static str],
    prep_time: f64,
    cook_time: f64,
    difficulty: &'static str,
    recipe_type: RecipeType,
    image_url: Option<&'static str>,
    video_url: Option<&'static str>,
}

const SEED_RECIPES: &[SeedRecipe] = &[
    SeedRecipe {
        title: "Ahmed's Special Chicken Noodles",
        description: "Quick stir-fried chicken noodles with veggies, perfect for weeknights.",
        ingredients: &[
            "160–200 g fresh egg noodles or 120–150 g dried egg noodles (about 1½ cups dried).",
            "250 g boneless chicken (breast or thigh), thinly sliced.",
            "2 tablespoons light soy sauce (for cooking).",
            "1 teaspoon dark soy sauce (optional — for color).",
            "1½ tablespoons oyster sauce.",
            "1 teaspoon sesame oil.",
            "1 teaspoon sugar (or honey).",
            "2 teaspoons cornflour (cornstarch) — for marinade.",
            "2 tablespoons water (for slurry) + extra for marinade.",
            "2–3 tablespoons vegetable oil (or peanut oil) for stir-frying.",
            "2 cloves garlic, thinly sliced or minced.",
            "1 teaspoon fresh ginger, minced (optional but recommended).",
            "1 small onion, thinly sliced (or 2 spring onions — use white part for cooking).",
            "1 small carrot, julienned or thinly sliced.",
            "1 cup shredded cabbage (napa or regular) or ½ bell pepper thinly sliced.",
            "½ cup bean sprouts (optional).",
            "2 spring onions (scallions), sliced on diagonal (green parts for garnish).",
            "Salt and white or black pepper, to taste.",
            "Lime wedge or toasted sesame seeds for finishing (optional).",
        ],
        steps: &[
            "Take 250 g boneless chicken and slice it into thin, even strips so it cooks quickly and stays tender.",
            "In a bowl, add 1 tbsp light soy sauce, 1 tsp sesame oil, 2 tsp cornflour, 1 tsp sugar, and 1 tbsp water, then mix well to create a smooth marinade.",
            "Add the sliced chicken to the marinade, coat all pieces properly, and let it rest for at least 10 minutes while you prepare other ingredients.",
            "If using dried noodles, boil them in salted water for 3–5 minutes or until just cooked (al dente), then drain immediately.",
            "Rinse the boiled noodles under cold water to stop the cooking process and prevent sticking, then toss with 1 tsp oil to keep them loose.",
            "If using fresh noodles, gently loosen them with your hands without breaking them.",
            "Prepare the vegetables by slicing 1 carrot into thin julienne strips, shredding 1 cup of cabbage, and thinly slicing 1 small onion or the white part of 2 spring onions.",
            "Chop the green parts of the spring onions into small diagonal pieces and keep them aside for garnishing at the end.",
            "In a small bowl, mix 1 tbsp light soy sauce, 1½ tbsp oyster sauce, ½ tsp dark soy sauce (optional), 1 tsp sugar, and 2 tbsp water to form the stir-fry sauce.",
            "Keep an additional 1–2 tbsp water nearby to adjust consistency later if needed.",
            "Heat a wok or large pan on high flame and add 1–1½ tbsp oil, letting it become hot until slightly smoking.",
            "Add the marinated chicken to the hot wok, spreading it out so each piece sears properly, and leave it untouched for 20–30 seconds.",
            "Stir-fry the chicken for 2–3 minutes until it turns white, lightly browns on the edges, and is fully cooked, then remove and keep aside.",
            "Add another 1 tbsp oil to the same hot wok and let it heat for a few seconds.",
            "Add minced garlic (2 cloves) and minced ginger (1 tsp) and stir quickly for 10–15 seconds until fragrant but not burnt.",
            "Add the sliced onion or spring onion whites and stir-fry for about 1 minute to soften slightly.",
            "Add the julienned carrot and continue stir-frying for another 1–2 minutes until the carrot becomes slightly tender but still crisp.",
            "Add the shredded cabbage and (optional) bean sprouts, stir-frying for 30–60 seconds to keep them crunchy.",
            "Return the cooked chicken into the wok and mix everything together.",
            "Add the boiled (or fresh) noodles into the wok, placing them on top of the chicken and vegetables.",
            "Pour the prepared stir-fry sauce evenly over the noodles to help distribute flavor throughout.",
            "Using tongs or two spatulas, gently toss the noodles, chicken, and vegetables together for 1–2 minutes until everything is evenly coated.",
            "If the noodles look dry or clumpy, sprinkle 1–2 tbsp water and toss again to loosen them up.",
            "Taste and adjust seasoning by adding a little more soy sauce for salt or a pinch of sugar if you want a slight sweetness.",
            "Add black pepper or white pepper according to your taste and stir well.",
            "Add the chopped spring onion green parts and toss lightly to combine without overcooking them.",
            "Turn off the heat and transfer the noodles to serving plates while still hot.",
            "Optionally, squeeze a little lime on top or sprinkle toasted sesame seeds for extra flavor before serving.",
        ],
        prep_time: 15.0,
        cook_time: 15.0,
        difficulty: "Easy",
        recipe_type: RecipeType::NonVeg,
        image_url: None,
        video_url: Some("https://youtu.be/AthGc8rDtHc?si=dqWUBMjOqGleLDda"),
    },
    SeedRecipe {
        title: "One-Pot Veggie Pasta",
        description: "Creamy one-pot pasta loaded with vegetables.",
        ingredients: &[
            "200 g pasta (penne or any short pasta)",
            "1 cup mixed vegetables (carrot, capsicum, peas, corn)",
            "1 medium onion, finely chopped",
            "2 cloves garlic, minced",
            "2 cups water or vegetable stock",
            "1/2 cup milk or fresh cream",
            "2 tbsp grated cheese",
            "1 tbsp butter or olive oil",
            "1/2 tsp black pepper",
            "1/2 tsp red chili flakes (optional)",
            "Salt to taste",
            "1/2 tsp oregano or mixed herbs",
        ],
        steps: &[
            "Heat butter or olive oil in a pot on medium flame.",
            "Add chopped onions and minced garlic; sauté until soft and fragrant.",
            "Add all mixed vegetables and stir-fry for 1–2 minutes.",
            "Add the pasta into the pot and mix well.",
            "Pour in 2 cups water or vegetable stock and add salt to taste.",
            "Cover the pot and cook on medium heat until the pasta becomes soft.",
            "Once the water reduces, add milk or cream and stir gently.",
            "Add black pepper, chili flakes, and oregano.",
            "Mix in the grated cheese and cook for another 1–2 minutes until creamy.",
            "Turn off the heat and let it sit for 1 minute before serving.",
            "Serve hot and enjoy your one-pot creamy veggie pasta!",
        ],
        prep_time: 10.0,
        cook_time: 20.0,
        difficulty: "Easy",
        recipe_type: RecipeType::Veg,
        image_url: None,
        video_url: Some("https://youtu.be/l4PQzpYFm04?si=9BdqtsEfg2ZCZT0c"),
    },
    SeedRecipe {
        title: "Chicken Biryani",
        description: "A flavorful layered chicken biryani cooked with aromatic rice and spices.",
        ingredients: &[
            "500 g chicken (bone-in or boneless)",
            "2 cups basmati rice (soak 20–30 mins)",
            "2 large onions, thinly sliced",
            "1 medium tomato, chopped",
            "1/2 cup yogurt",
            "2 tbsp ginger-garlic paste",
            "3–4 green chilies, slit",
            "1/2 cup chopped coriander leaves",
            "1/2 cup mint leaves",
            "1 tbsp biryani masala",
            "1 tsp turmeric powder",
            "1 tsp red chilli powder",
            "4 tbsp oil or ghee",
            "Whole spices: 1 bay leaf, 4 cloves, 4 cardamom, 1 cinnamon stick, 1 star anise",
            "3 cups water",
            "Saffron milk (optional): 2 tbsp warm milk + few saffron strands",
            "Salt to taste",
        ],
        steps: &[
            "Wash and soak basmati rice for 20–30 minutes.",
            "Heat oil or ghee in a large pot and fry the whole spices for 30 seconds.",
            "Add sliced onions and cook until golden brown.",
            "Add ginger-garlic paste and sauté until the raw smell disappears.",
            "Add chicken pieces and cook for 5–7 minutes until lightly browned.",
            "Add chopped tomatoes, turmeric, red chilli powder, biryani masala, and salt.",
            "Cook until tomatoes turn soft and chicken releases moisture.",
            "Add yogurt, mint leaves, and coriander leaves; cook for 5 minutes on medium heat.",
            "Add 3 cups water and let the chicken cook until about 70–80% done.",
            "In another pot, boil water and cook the soaked rice until 70% done, then drain completely.",
            "Spread the half-cooked rice evenly on top of the chicken masala to form layers.",
            "Sprinkle saffron milk (if using), some fried onions, and a few mint and coriander leaves on top.",
            "Cover the pot tightly with a lid and cook on low flame for 15–20 minutes.",
            "Turn off the heat and let the biryani rest for another 10 minutes.",
            "Gently fluff up the biryani from the sides and serve hot with raita or salad.",
        ],
        prep_time: 20.0,
        cook_time: 40.0,
        difficulty: "Hard",
        recipe_type: RecipeType::NonVeg,
        image_url: None,
        video_url: Some("https://youtu.be/EiVoWp5b93s?si=Gbi2Miu707YCyPs8"),
    },
    SeedRecipe {
        title: "Cheese Omelette",
        description: "A soft, fluffy omelette filled with melted cheese.",
        ingredients: &[
            "2–3 eggs",
            "3–4 tbsp grated cheese (cheddar, mozzarella, or processed cheese)",
            "1 tbsp butter or oil",
            "1/4 cup finely chopped onions",
            "1 green chili, finely chopped (optional)",
            "2 tbsp chopped coriander leaves",
            "Salt to taste",
            "Black pepper to taste",
        ],
        steps: &[
            "Crack the eggs into a bowl, add salt and black pepper, and whisk well until slightly frothy.",
            "Heat butter or oil in a small non-stick pan over medium heat.",
            "Add chopped onions and green chilli, and sauté for 1–2 minutes until they soften slightly.",
            "Pour the whisked eggs into the pan and tilt the pan to spread the mixture evenly.",
            "Reduce the flame to low and cook until the omelette is almost set on top but still slightly soft.",
            "Sprinkle grated cheese evenly on one half of the omelette and add chopped coriander leaves.",
            "Gently fold the other half of the omelette over the cheese using a spatula.",
            "Cook for another 1–2 minutes on low heat until the cheese melts inside.",
            "Slide the omelette onto a plate and serve hot with toast or ketchup.",
        ],
        prep_time: 5.0,
        cook_time: 5.0,
        difficulty: "Easy",
        recipe_type: RecipeType::NonVeg,
        image_url: None,
        video_url: Some("https://youtu.be/RsKonQWs8z8?si=uilLtmN2MSQg4m_5"),
    },
    SeedRecipe {
        title: "Paneer Tikka Wrap",
        description: "Grilled paneer stuffed in soft rotis with salad.",
        ingredients: &[
            "200 g paneer cubes",
            "4 rotis",
            "1/2 cup yogurt",
            "Spices (red chilli powder, turmeric, garam masala)",
            "1 onion, sliced",
            "1 capsicum, sliced",
        ],
        steps: &[
            "Mix yogurt with spices to make a marinade.",
            "Add paneer cubes and coat well; rest 15–20 mins.",
            "Grill or pan-fry paneer with onions and capsicum until slightly charred.",
            "Warm the rotis on a tawa.",
            "Place the paneer mixture in the centre of each roti.",
            "Roll tightly into a wrap and serve hot.",
        ],
        prep_time: 20.0,
        cook_time: 15.0,
        difficulty: "Medium",
        recipe_type: RecipeType::Veg,
        image_url: Some(
            "https://images.unsplash.com/photo-1567188040759-fb8a883dc6d8?auto=format&fit=crop&w=800&q=80",
        ),
        video_url: Some("https://youtu.be/rre7unozEJk?si=lSLRw_xj2XDMHT5x"),
    },
];

/// Build the starter collection. Identifiers and timestamps are generated
/// fresh on every call; the result is meant to be persisted immediately.
pub fn seed_recipes() -> Vec<Recipe> {
    SEED_RECIPES
        .iter()
        .map(|seed| Recipe {
            id: generate_id(),
            title: seed.title.to_string(),
            description: seed.description.to_string(),
            ingredients: seed.ingredients.iter().map(|s| s.to_string()).collect(),
            steps: seed.steps.iter().map(|s| s.to_string()).collect(),
            prep_time: seed.prep_time,
            cook_time: seed.cook_time,
            difficulty: seed.difficulty.to_string(),
            recipe_type: seed.recipe_type,
            image_url: seed.image_url.map(|s| s.to_string()),
            video_url: seed.video_url.map(|s| s.to_string()),
            rating: 0.0,
            rating_count: 0,
            reviews: Vec::new(),
            created_at: now_timestamp(),
            extra: Map::new(),
        })
        .collect()
}
