/// Site copy seeded on first boot. Existing keys are never overwritten by seeding.
pub const DEFAULT_CONTENT: &[(&str, &str)] = &[
    ("hero_intro", "Halo, saya"),
    ("hero_name", "Nama Anda"),
    ("hero_subtitle", "Creative Developer • Video Editor • Storyteller"),
    ("about_title", "About Me · Story Mode"),
    ("story_1_title", "Chapter 1 · Spark"),
    (
        "story_1_text",
        "Awal perjalanan dimulai dari rasa penasaran terhadap desain dan coding interaktif.",
    ),
    ("story_2_title", "Chapter 2 · Build"),
    ("story_2_text", "Membangun website, video, dan visual storytelling yang engaging."),
    ("story_3_title", "Chapter 3 · Evolve"),
    ("story_3_text", "Menyeimbangkan kreativitas, performa, dan user experience modern."),
    ("projects_title", "Projects"),
    ("games_title", "Mini Game Zone"),
    ("leaderboard_title", "Leaderboard Lokal"),
    ("project_1_title", "Immersive Landing"),
    ("project_2_title", "Brand Motion Reel"),
    ("project_3_title", "UI Aesthetic Kit"),
    ("game_1_desc", "Gerakkan karakter dengan mouse / sentuh untuk menangkap skill."),
    ("game_3_desc", "Tekan Space/↑ untuk lompat dan hindari bug!"),
    ("secret_message", "🌌 Secret Mode unlocked: \"You found the hidden cosmos of creativity!\""),
    ("contact_title", "Contact Me"),
    ("contact_button", "Kirim Pesan"),
];
