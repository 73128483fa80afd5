// src/categories.rs
//! Static reference data: area → flag image, plus the sidebar quick filters.

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Category {
    pub area: &'static str,
    pub image: &'static str,
}

/// Areas shown as browse tiles on the home page (order is display order).
pub const CATEGORIES: &[Category] = &[
    Category {
        area: "Spanish",
        image: "https://upload.wikimedia.org/wikipedia/en/9/9a/Flag_of_Spain.svg",
    },
    Category {
        area: "Japanese",
        image: "https://upload.wikimedia.org/wikipedia/en/9/9e/Flag_of_Japan.svg",
    },
    Category {
        area: "Croatian",
        image: "https://upload.wikimedia.org/wikipedia/commons/1/1b/Flag_of_Croatia.svg",
    },
    Category {
        area: "Egyptian",
        image: "https://upload.wikimedia.org/wikipedia/commons/f/fe/Flag_of_Egypt.svg",
    },
    Category {
        area: "Filipino",
        image: "https://upload.wikimedia.org/wikipedia/commons/9/99/Flag_of_the_Philippines.svg",
    },
    Category {
        area: "Chinese",
        image: "https://upload.wikimedia.org/wikipedia/commons/f/fa/Flag_of_the_People%27s_Republic_of_China.svg",
    },
    Category {
        area: "Tunisian",
        image: "https://upload.wikimedia.org/wikipedia/commons/c/ce/Flag_of_Tunisia.svg",
    },
    Category {
        area: "American",
        image: "https://upload.wikimedia.org/wikipedia/en/a/a4/Flag_of_the_United_States.svg",
    },
    Category {
        area: "Italian",
        image: "https://upload.wikimedia.org/wikipedia/en/0/03/Flag_of_Italy.svg",
    },
    Category {
        area: "Canadian",
        image: "https://upload.wikimedia.org/wikipedia/commons/c/cf/Flag_of_Canada.svg",
    },
    Category {
        area: "Indian",
        image: "https://upload.wikimedia.org/wikipedia/en/4/41/Flag_of_India.svg",
    },
    Category {
        area: "Dutch",
        image: "https://upload.wikimedia.org/wikipedia/commons/2/20/Flag_of_the_Netherlands.svg",
    },
    Category {
        area: "Greek",
        image: "https://upload.wikimedia.org/wikipedia/commons/5/5c/Flag_of_Greece.svg",
    },
    Category {
        area: "British",
        image: "https://upload.wikimedia.org/wikipedia/en/a/ae/Flag_of_the_United_Kingdom.svg",
    },
    Category {
        area: "French",
        image: "https://upload.wikimedia.org/wikipedia/en/c/c3/Flag_of_France.svg",
    },
    Category {
        area: "Malaysian",
        image: "https://upload.wikimedia.org/wikipedia/commons/6/66/Flag_of_Malaysia.svg",
    },
];

/// Category names offered in the listing sidebar.
pub const QUICK_FILTERS: &[&str] = &[
    "Seafood",
    "Miscellaneous",
    "Vegetarian",
    "Dessert",
    "Chicken",
    "Beef",
    "Pork",
    "Starter",
    "Pasta",
    "Breakfast",
    "Lamb",
    "Goat",
    "Vegan",
];

/// Case-insensitive flag lookup. Unknown or empty areas have no flag.
pub fn flag_for_area(area: &str) -> Option<&'static str> {
    if area.is_empty() {
        return None;
    }
    CATEGORIES
        .iter()
        .find(|c| c.area.eq_ignore_ascii_case(area))
        .map(|c| c.image)
}
