use crate::models::{HealerId, HealerProfile, Money};

/// Category sentinel that matches every healer.
pub const ALL_CATEGORY: &str = "All";

/// Category chips shown above the healer list, in display order.
pub const CATEGORIES: &[&str] = &[
    ALL_CATEGORY,
    "Reiki",
    "Meditation",
    "Zen",
    "Astrology",
    "Sound Therapy",
    "Yoga",
    "Psychology",
];

/// Network-wide figures shown in the home hero banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlobalStats {
    pub active_sessions: u32,
    pub countries_online: u32,
    pub healers_available: u32,
}

pub const GLOBAL_STATS: GlobalStats = GlobalStats {
    active_sessions: 142,
    countries_online: 48,
    healers_available: 1205,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The seeded catalog.
pub fn mock_healers() -> Vec<HealerProfile> {
    vec![
        HealerProfile {
            id: HealerId::new("h1"),
            name: "Dr. Seraphina Moon".to_string(),
            specialty: "Intuitive Energy Healing".to_string(),
            bio: "Guiding souls to find their inner light through ancient energy practices."
                .to_string(),
            full_bio: "With over 15 years of experience in the healing arts, Dr. Seraphina Moon \
                combines her background in clinical psychology with ancient Reiki and chakra \
                balancing techniques. Her sessions are a sanctuary for those seeking clarity, \
                emotional release, and a renewed sense of purpose. She believes that every soul \
                has a unique frequency, and her goal is to help you tune yours to its highest \
                potential."
                .to_string(),
            rating: 4.9,
            reviews_count: 1240,
            price_per_minute: Money::from_cents(250),
            is_online: true,
            avatar: "https://images.unsplash.com/photo-1544005313-94ddf0286df2?auto=format&fit=crop&q=80&w=200".to_string(),
            gallery: strings(&[
                "https://images.unsplash.com/photo-1515377905703-c4788e51af15?auto=format&fit=crop&q=80&w=400",
                "https://images.unsplash.com/photo-1593811167562-9cef47bfc4d7?auto=format&fit=crop&q=80&w=400",
                "https://images.unsplash.com/photo-1506126613408-eca07ce68773?auto=format&fit=crop&q=80&w=400",
            ]),
            intro_video: Some(
                "https://assets.mixkit.co/videos/preview/mixkit-woman-meditating-in-the-forest-30043-large.mp4"
                    .to_string(),
            ),
            categories: strings(&["Reiki", "Chakra Balancing", "Meditation"]),
            location: "United Kingdom".to_string(),
            languages: strings(&["English", "French"]),
        },
        HealerProfile {
            id: HealerId::new("h2"),
            name: "Master Kenji".to_string(),
            specialty: "Zen Mindfulness Coach".to_string(),
            bio: "30 years of experience in monastic training. Specializing in anxiety relief."
                .to_string(),
            full_bio: "Master Kenji spent three decades in the mountain monasteries of Kyoto \
                before deciding to bring his wisdom to the global community. His teaching \
                focuses on the \"Way of the Breath\", a powerful method to anchor the wandering \
                mind. Whether you are facing high-pressure career challenges or deep personal \
                grief, Kenji provides a grounded, compassionate space for stillness."
                .to_string(),
            rating: 4.8,
            reviews_count: 856,
            price_per_minute: Money::from_cents(180),
            is_online: true,
            avatar: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?auto=format&fit=crop&q=80&w=200".to_string(),
            gallery: strings(&[
                "https://images.unsplash.com/photo-1528715471579-d1bcf0ba5e83?auto=format&fit=crop&q=80&w=400",
                "https://images.unsplash.com/photo-1508672019048-805c876b67e2?auto=format&fit=crop&q=80&w=400",
                "https://images.unsplash.com/photo-1545205597-3d9d02c17592?auto=format&fit=crop&q=80&w=400",
            ]),
            intro_video: Some(
                "https://assets.mixkit.co/videos/preview/mixkit-man-sitting-on-a-rock-meditating-in-the-mountains-32766-large.mp4"
                    .to_string(),
            ),
            categories: strings(&["Zen", "Breathwork", "Counseling"]),
            location: "Japan".to_string(),
            languages: strings(&["Japanese", "English"]),
        },
        HealerProfile {
            id: HealerId::new("h3"),
            name: "Elena Vance".to_string(),
            specialty: "Astrology & Tarot Guide".to_string(),
            bio: "Unlocking the mysteries of the stars to help you navigate life transitions."
                .to_string(),
            full_bio: "Elena is a third-generation intuitive who reads the cosmic map to find \
                your hidden paths. Her approach to Astrology is not just about prediction, but \
                about empowerment. By understanding the planetary cycles at play in your life, \
                you can make informed decisions about love, career, and personal growth. She \
                uses her bespoke Tarot decks to provide immediate, actionable insights."
                .to_string(),
            rating: 5.0,
            reviews_count: 310,
            price_per_minute: Money::from_cents(300),
            is_online: false,
            avatar: "https://images.unsplash.com/photo-1580489944761-15a19d654956?auto=format&fit=crop&q=80&w=200".to_string(),
            gallery: strings(&[
                "https://images.unsplash.com/photo-1568910129154-1909a320579b?auto=format&fit=crop&q=80&w=400",
                "https://images.unsplash.com/photo-1518531933037-91b2f5f229cc?auto=format&fit=crop&q=80&w=400",
                "https://images.unsplash.com/photo-1628155930542-3c7a64e2c833?auto=format&fit=crop&q=80&w=400",
            ]),
            intro_video: None,
            categories: strings(&["Astrology", "Tarot", "Life Coaching"]),
            location: "Brazil".to_string(),
            languages: strings(&["Portuguese", "Spanish", "English"]),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_ids_are_unique() {
        let healers = mock_healers();
        let mut ids: Vec<_> = healers.iter().map(|h| h.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), healers.len());
    }

    #[test]
    fn test_categories_start_with_sentinel() {
        assert_eq!(CATEGORIES[0], ALL_CATEGORY);
    }

    #[test]
    fn test_seed_rates() {
        let healers = mock_healers();
        assert_eq!(healers[0].price_per_minute, Money::from_cents(250));
        assert_eq!(healers[1].price_per_minute, Money::from_cents(180));
        assert_eq!(healers[2].price_per_minute, Money::from_cents(300));
        assert!(healers[2].intro_video.is_none());
    }
}
