use log::info;
use mongodb::bson::{doc, to_document, Document};

use crate::db::SharedStore;
use crate::models::faq::Faq;
use crate::models::trip::Trip;
use crate::utils::error::AppResult;

// Bootstrap content for a fresh database. Each collection is checked and
// filled independently, so either, both, or neither insert may run.
// Sequential calls are idempotent; concurrent first calls are not guarded.
pub struct SeedService {
    store: SharedStore,
}

impl SeedService {
    pub fn new(store: SharedStore) -> Self {
        SeedService { store }
    }

    pub async fn seed_defaults(&self) -> AppResult<()> {
        if self.store.count(Trip::COLLECTION, doc! {}).await? == 0 {
            let trips = default_trips()?;
            info!("seeding {} default trips", trips.len());
            self.store.insert_many(Trip::COLLECTION, trips).await?;
        }

        if self.store.count(Faq::COLLECTION, doc! {}).await? == 0 {
            let faqs = default_faqs()?;
            info!("seeding {} default FAQs", faqs.len());
            self.store.insert_many(Faq::COLLECTION, faqs).await?;
        }

        Ok(())
    }
}

fn default_trips() -> AppResult<Vec<Document>> {
    let trips = vec![
        Trip {
            title: "Dimaniyat Island Day Trip".to_string(),
            trip_type: "dimaniyat".to_string(),
            description: "Explore the pristine Dimaniyat Islands aboard our 11.3m Looker 370 \
                          glass-bottom boat. Snorkel vibrant reefs, spot sea turtles, and enjoy \
                          a beach stop."
                .to_string(),
            location: "Dimaniyat Islands, Oman".to_string(),
            price_per_person: 35.0,
            capacity: 20,
            duration_hours: 5.0,
            highlights: vec![
                "Snorkeling coral reefs".to_string(),
                "Sea turtles and marine life".to_string(),
                "Beachtime on a protected island".to_string(),
                "Glass-bottom reef viewing".to_string(),
            ],
            includes: vec![
                "Captain & crew".to_string(),
                "Snorkel gear".to_string(),
                "Water & soft drinks".to_string(),
            ],
            images: vec![
                "/images/dimaniyat-1.jpg".to_string(),
                "/images/dimaniyat-2.jpg".to_string(),
                "/images/looker370.jpg".to_string(),
            ],
            ..Trip::default()
        },
        Trip {
            title: "Muscat Sunset Cruise".to_string(),
            trip_type: "sunset".to_string(),
            description: "A golden-hour cruise along Muscat's coastline aboard our Looker 370. \
                          Take in Al Alam Palace, Muttrah Corniche, and dramatic sea cliffs as \
                          the sun sets."
                .to_string(),
            location: "Muscat Coastline, Oman".to_string(),
            price_per_person: 20.0,
            capacity: 10,
            duration_hours: 2.0,
            highlights: vec![
                "Golden hour views".to_string(),
                "Iconic Muscat landmarks".to_string(),
                "Relaxed vibes on calm waters".to_string(),
                "Great photo opportunities".to_string(),
            ],
            includes: vec![
                "Captain & crew".to_string(),
                "Water & soft drinks".to_string(),
            ],
            images: vec![
                "/images/sunset-1.jpg".to_string(),
                "/images/sunset-2.jpg".to_string(),
                "/images/looker370.jpg".to_string(),
            ],
            ..Trip::default()
        },
    ];

    let mut documents = Vec::with_capacity(trips.len());
    for trip in &trips {
        documents.push(to_document(trip)?);
    }

    Ok(documents)
}

fn default_faqs() -> AppResult<Vec<Document>> {
    let faqs = vec![
        Faq {
            id: None,
            question: "Where do trips depart from?".to_string(),
            answer: "Muscat, Oman. Exact marina details shared upon booking.".to_string(),
            category: "general".to_string(),
            order: 1,
        },
        Faq {
            id: None,
            question: "How many guests can join?".to_string(),
            answer: "Up to 18-20 for Dimaniyat and 8-10 for sunset trips.".to_string(),
            category: "capacity".to_string(),
            order: 2,
        },
        Faq {
            id: None,
            question: "What should I bring?".to_string(),
            answer: "Sunscreen, hat, towel, and swimwear. We provide water, soft drinks, and \
                     snorkel gear for day trips."
                .to_string(),
            category: "prep".to_string(),
            order: 3,
        },
        Faq {
            id: None,
            question: "Is the glass bottom safe?".to_string(),
            answer: "Yes. The Looker 370 is purpose-built with reinforced glass for reef viewing."
                .to_string(),
            category: "safety".to_string(),
            order: 4,
        },
    ];

    let mut documents = Vec::with_capacity(faqs.len());
    for faq in &faqs {
        documents.push(to_document(faq)?);
    }

    Ok(documents)
}
