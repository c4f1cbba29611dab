//! Built-in starter catalog seeded into an empty store on first run.

pub struct CategorySeed {
    pub name: &'static str,
    pub color: &'static str,
    pub description: &'static str,
}

pub struct ExerciseSeed {
    pub name: &'static str,
    pub category: &'static str,
    pub description: &'static str,
}

pub const CATEGORIES: [CategorySeed; 4] = [
    CategorySeed {
        name: "chest",
        color: "#F97316",
        description: "Chest and pectoral exercises",
    },
    CategorySeed {
        name: "triceps",
        color: "#EF4444",
        description: "Tricep and arm extension exercises",
    },
    CategorySeed {
        name: "biceps",
        color: "#10B981",
        description: "Bicep and arm curl exercises",
    },
    CategorySeed {
        name: "legs",
        color: "#3B82F6",
        description: "Leg and lower body exercises",
    },
];

pub const EXERCISES: [ExerciseSeed; 4] = [
    ExerciseSeed {
        name: "Bench Press",
        category: "chest",
        description: "Classic chest exercise with barbell",
    },
    ExerciseSeed {
        name: "Tricep Dips",
        category: "triceps",
        description: "Bodyweight tricep exercise",
    },
    ExerciseSeed {
        name: "Bicep Curls",
        category: "biceps",
        description: "Isolated bicep exercise with dumbbells",
    },
    ExerciseSeed {
        name: "Squats",
        category: "legs",
        description: "Full body compound movement",
    },
];
