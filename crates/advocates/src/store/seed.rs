//! Built-in seed collection
//!
//! Used to populate a fresh database (`advocates seed`) and, with
//! `--seed-data`, served directly when no database is reachable.

use async_trait::async_trait;
use chrono::Utc;

use super::{AdvocateStore, StoreError};
use crate::model::{AdvocateRow, NewAdvocate};

const SPECIALTIES: &[&str] = &[
  "Bipolar",
  "LGBTQ",
  "Medication/Prescribing",
  "Suicide History/Attempts",
  "General Mental Health (anxiety, depression, stress, grief, life transitions)",
  "Men's issues",
  "Relationship Issues (family, friends, couple, etc)",
  "Trauma & PTSD",
  "Personality disorders",
  "Personal growth",
  "Substance use/abuse",
  "Pediatrics",
  "Women's issues (post-partum, infertility, family planning)",
  "Chronic pain",
  "Weight loss & nutrition",
  "Eating disorders",
  "Diabetic Diet and nutrition",
  "Coaching (leadership, career, academic and wellness)",
  "Life coaching",
  "Obsessive-compulsive disorders",
  "Neuropsychological evaluations & testing (ADHD testing)",
  "Attention and Hyperactivity (ADHD)",
  "Sleep issues",
  "Schizophrenia and psychotic disorders",
  "Learning disorders",
  "Domestic abuse",
];

/// (first, last, city, degree, specialty indices, years, phone)
const SEED: &[(&str, &str, &str, &str, &[usize], i64, i64)] = &[
  ("John", "Doe", "New York", "MD", &[0, 4, 7], 10, 5551234567),
  ("Jane", "Smith", "Los Angeles", "PhD", &[1, 9], 8, 5559876543),
  ("Alice", "Johnson", "Chicago", "MSW", &[7, 25, 10], 5, 5554567890),
  ("Michael", "Brown", "Houston", "MD", &[2, 22, 13], 12, 5556543210),
  ("Emily", "Davis", "Phoenix", "PhD", &[15, 14], 7, 5553210987),
  ("Chris", "Martinez", "Philadelphia", "MSW", &[5, 6], 9, 5557890123),
  ("Jessica", "Taylor", "San Antonio", "MD", &[11, 21, 20], 11, 5554561234),
  ("David", "Harris", "San Diego", "PhD", &[17, 18], 6, 5557896543),
  ("Laura", "Clark", "Dallas", "MSW", &[12, 6, 4], 4, 5550123456),
  ("Daniel", "Lewis", "San Jose", "MD", &[23, 0, 2], 13, 5553217654),
  ("Sarah", "Lee", "Austin", "PhD", &[19, 8], 10, 5551238765),
  ("James", "King", "Jacksonville", "MSW", &[3, 10], 5, 5556540987),
  ("Megan", "Green", "San Francisco", "MD", &[16, 14, 13], 12, 5553216543),
  ("Joshua", "Walker", "Columbus", "PhD", &[24, 20], 9, 5554567891),
  ("Amanda", "Hall", "Fort Worth", "MSW", &[9, 18, 6], 3, 5558901234),
];

/// The seed collection in insert shape
pub fn seed_advocates() -> Vec<NewAdvocate> {
  SEED
    .iter()
    .map(|(first, last, city, degree, specialties, years, phone)| NewAdvocate {
      first_name: first.to_string(),
      last_name: last.to_string(),
      city: city.to_string(),
      degree: degree.to_string(),
      specialties: specialties.iter().map(|&i| SPECIALTIES[i].to_string()).collect(),
      years_of_experience: *years,
      phone_number: *phone,
    })
    .collect()
}

/// Store serving the seed collection without a database
pub struct SeedStore {
  rows: Vec<AdvocateRow>,
}

impl Default for SeedStore {
  fn default() -> Self {
    Self::new()
  }
}

impl SeedStore {
  pub fn new() -> Self {
    Self::from_advocates(seed_advocates())
  }

  /// Serve an arbitrary collection, numbered from 1 in the given order
  pub fn from_advocates(advocates: Vec<NewAdvocate>) -> Self {
    let created_at = Utc::now();
    let rows = advocates
      .into_iter()
      .zip(1..)
      .map(|(advocate, id)| AdvocateRow {
        id,
        first_name: advocate.first_name,
        last_name: advocate.last_name,
        city: advocate.city,
        degree: advocate.degree,
        specialties: advocate.specialties,
        years_of_experience: advocate.years_of_experience,
        phone_number: advocate.phone_number,
        created_at,
      })
      .collect();

    Self { rows }
  }
}

#[async_trait]
impl AdvocateStore for SeedStore {
  async fn all(&self) -> Result<Vec<AdvocateRow>, StoreError> {
    Ok(self.rows.clone())
  }
}
