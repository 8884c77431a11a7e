use super::BreedRecord;

pub const TITLE: &str = "Purrfect Cat World";

pub const INTRO: &str = "Cats are fascinating creatures that have been domesticated for thousands of years. They are known for their independence, agility, and affectionate nature. Cats come in various breeds, each with its unique characteristics and personalities.";

pub const BREEDS: [BreedRecord; 5] = [
    BreedRecord {
        name: "Siamese",
        description: "Known for their distinctive color points and blue eyes.",
        image_ref: "https://upload.wikimedia.org/wikipedia/commons/2/25/Siam_lilacpoint.jpg",
    },
    BreedRecord {
        name: "Maine Coon",
        description:
            "One of the largest domesticated cat breeds with a distinctive physical appearance.",
        image_ref:
            "https://upload.wikimedia.org/wikipedia/commons/5/5f/Maine_Coon_cat_by_Tomitheos.JPG",
    },
    BreedRecord {
        name: "Persian",
        description: "Characterized by their round face and short muzzle.",
        image_ref: "https://upload.wikimedia.org/wikipedia/commons/1/15/White_Persian_Cat.jpg",
    },
    BreedRecord {
        name: "Bengal",
        description: "Known for their wild appearance and energetic personality.",
        image_ref:
            "https://upload.wikimedia.org/wikipedia/commons/b/ba/Paintedcats_Red_Star_standing.jpg",
    },
    BreedRecord {
        name: "Sphynx",
        description: "Distinctive for their lack of coat and wrinkled skin.",
        image_ref: "https://upload.wikimedia.org/wikipedia/commons/e/e8/Sphinx2_July_2006.jpg",
    },
];

pub const FACTS: [&str; 5] = [
    "Cats sleep for about 70% of their lives",
    "A group of cats is called a 'clowder'",
    "Cats have over 20 different vocalizations",
    "A cat's sense of smell is 14 times stronger than a human's",
    "The first cat in space was a French cat named Felicette in 1963",
];

pub const CARE_TIPS: [&str; 5] = [
    "Provide a balanced diet suitable for your cat's age and health condition",
    "Ensure fresh water is always available",
    "Regular grooming to keep their coat healthy",
    "Schedule regular check-ups with a veterinarian",
    "Provide mental stimulation with toys and play sessions",
];
