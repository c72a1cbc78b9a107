//! The fixed catalog of falling foods.

/// Whether catching a food helps or hurts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Good,
    Bad,
}

impl Category {
    /// Health change applied when a food of this category is caught.
    pub fn health_delta(self) -> i32 {
        match self {
            Category::Good => 1,
            Category::Bad => -1,
        }
    }
}

/// One of the nine food kinds that can fall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FoodKind {
    Almond,
    Milk,
    Guava,
    Meat,
    Spinach,
    Chocolate,
    Cookie,
    Soda,
    Cigarette,
}

impl FoodKind {
    pub const ALL: [FoodKind; 9] = [
        FoodKind::Almond,
        FoodKind::Milk,
        FoodKind::Guava,
        FoodKind::Meat,
        FoodKind::Spinach,
        FoodKind::Chocolate,
        FoodKind::Cookie,
        FoodKind::Soda,
        FoodKind::Cigarette,
    ];

    /// Sprite file name, resolved in the asset directory.
    pub fn file_name(self) -> &'static str {
        match self {
            FoodKind::Almond => "almond2.png",
            FoodKind::Milk => "milk2.png",
            FoodKind::Guava => "guava2.png",
            FoodKind::Meat => "meat2.png",
            FoodKind::Spinach => "spinach2.png",
            FoodKind::Chocolate => "choci2.png",
            FoodKind::Cookie => "cookie2.png",
            FoodKind::Soda => "soda2.png",
            FoodKind::Cigarette => "ciggs2.png",
        }
    }

    /// Short label shown in the catch message (the vitamin for good foods).
    pub fn label(self) -> &'static str {
        match self {
            FoodKind::Almond => "Vitamin E",
            FoodKind::Milk => "Vitamin D",
            FoodKind::Guava => "Vitamin C",
            FoodKind::Meat => "Vitamin B",
            FoodKind::Spinach => "Vitamin K",
            FoodKind::Chocolate => "Chocolate",
            FoodKind::Cookie => "Cookie",
            FoodKind::Soda => "Soda",
            FoodKind::Cigarette => "Cigarette",
        }
    }

    /// What the food does to teeth.
    pub fn description(self) -> &'static str {
        match self {
            FoodKind::Almond => "Heals inflamed oral tissues",
            FoodKind::Milk => "Strengthens teeth and bones",
            FoodKind::Guava => "Reduces gingival inflammation",
            FoodKind::Meat => "Prevents mouth sores",
            FoodKind::Spinach => "Helps blood clotting and bones",
            FoodKind::Chocolate => "High sugar content",
            FoodKind::Cookie => "Too much sugar",
            FoodKind::Soda => "Enamel erosion",
            FoodKind::Cigarette => "Extremely harmful",
        }
    }

    pub fn category(self) -> Category {
        match self {
            FoodKind::Almond
            | FoodKind::Milk
            | FoodKind::Guava
            | FoodKind::Meat
            | FoodKind::Spinach => Category::Good,
            FoodKind::Chocolate | FoodKind::Cookie | FoodKind::Soda | FoodKind::Cigarette => {
                Category::Bad
            }
        }
    }

    /// Message shown after catching this food, e.g. `"Soda: Enamel erosion (-1)"`.
    pub fn catch_message(self) -> String {
        let sign = match self.category() {
            Category::Good => "+1",
            Category::Bad => "-1",
        };
        format!("{}: {} ({})", self.label(), self.description(), sign)
    }

    /// Message shown when this food drains the last point of health.
    pub fn destruction_message(self) -> String {
        format!("{} destroyed your health. Game Over!", self.label())
    }
}
