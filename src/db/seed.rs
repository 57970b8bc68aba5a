//! Reference specialties and sample advocates for a fresh directory.

use rand::Rng;
use rusqlite::Connection;
use serde::Serialize;

use super::repository::{insert_specialty_if_absent, link_specialties};
use super::DatabaseError;
use crate::models::AdvocateFields;

pub const SPECIALTIES: [&str; 26] = [
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

/// Sample advocates as (first name, last name, city, degree, years, phone).
const SAMPLE_ADVOCATES: [(&str, &str, &str, &str, u32, i64); 15] = [
    ("John", "Doe", "New York", "MD", 10, 5551234567),
    ("Jane", "Smith", "Los Angeles", "PhD", 8, 5559876543),
    ("Alice", "Johnson", "Chicago", "MSW", 5, 5554567890),
    ("Michael", "Brown", "Houston", "MD", 12, 5556543210),
    ("Emily", "Davis", "Phoenix", "PhD", 7, 5553210987),
    ("Chris", "Martinez", "Philadelphia", "MSW", 9, 5557890123),
    ("Jessica", "Taylor", "San Antonio", "MD", 11, 5554561234),
    ("David", "Harris", "San Diego", "PhD", 6, 5557896543),
    ("Laura", "Clark", "Dallas", "MSW", 4, 5550123456),
    ("Daniel", "Lewis", "San Jose", "MD", 13, 5553217654),
    ("Sarah", "Lee", "Austin", "PhD", 10, 5551238765),
    ("James", "King", "Jacksonville", "MSW", 5, 5556540987),
    ("Megan", "Green", "San Francisco", "MD", 14, 5559873456),
    ("Joshua", "Walker", "Columbus", "PhD", 9, 5556781234),
    ("Amanda", "Hall", "Fort Worth", "MSW", 3, 5559872345),
];

/// Upper bound (exclusive for the first pick, inclusive for the second)
/// of the specialty indices drawn for each sample advocate.
const SPECIALTY_PICK_RANGE: usize = 24;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedSummary {
    pub specialties_inserted: usize,
    pub advocates_inserted: usize,
    pub links_inserted: usize,
}

/// Two distinct specialty indices, the second strictly after the first.
pub fn random_specialty_indices<R: Rng>(rng: &mut R) -> [usize; 2] {
    let first = rng.gen_range(0..SPECIALTY_PICK_RANGE);
    let second = rng.gen_range(first + 1..=SPECIALTY_PICK_RANGE);
    [first, second]
}

pub fn sample_advocates() -> impl Iterator<Item = AdvocateFields> {
    SAMPLE_ADVOCATES.iter().map(
        |&(first_name, last_name, city, degree, years_of_experience, phone_number)| {
            AdvocateFields {
                first_name: first_name.into(),
                last_name: last_name.into(),
                city: city.into(),
                degree: degree.into(),
                years_of_experience,
                phone_number,
            }
        },
    )
}

/// Insert every reference specialty (if absent) and append the sample
/// advocates, each linked to two randomly picked specialties.
///
/// Runs as one transaction. Advocates are appended on every call.
pub fn seed_database<R: Rng>(
    conn: &Connection,
    rng: &mut R,
) -> Result<SeedSummary, DatabaseError> {
    let tx = conn.unchecked_transaction()?;

    let mut specialties_inserted = 0;
    for name in SPECIALTIES {
        if insert_specialty_if_absent(&tx, name)? {
            specialties_inserted += 1;
        }
    }

    let mut advocates_inserted = 0;
    let mut links_inserted = 0;
    {
        let mut insert_advocate = tx.prepare(
            "INSERT INTO advocates (first_name, last_name, city, degree, years_of_experience, phone_number)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        )?;

        for advocate in sample_advocates() {
            let advocate_id = insert_advocate.insert(rusqlite::params![
                advocate.first_name,
                advocate.last_name,
                advocate.city,
                advocate.degree,
                advocate.years_of_experience,
                advocate.phone_number,
            ])?;
            advocates_inserted += 1;

            let picked: Vec<String> = random_specialty_indices(rng)
                .iter()
                .map(|&i| SPECIALTIES[i].to_string())
                .collect();
            links_inserted += link_specialties(&tx, advocate_id, &picked)?;
        }
    }

    tx.commit()?;

    tracing::info!(
        specialties_inserted,
        advocates_inserted,
        links_inserted,
        "Directory seeded"
    );

    Ok(SeedSummary {
        specialties_inserted,
        advocates_inserted,
        links_inserted,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::{list_advocates, list_specialties};
    use crate::db::sqlite::open_memory_database;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn specialty_indices_are_ordered_and_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1_000 {
            let [first, second] = random_specialty_indices(&mut rng);
            assert!(first < SPECIALTY_PICK_RANGE);
            assert!(second > first);
            assert!(second <= SPECIALTY_PICK_RANGE);
            assert!(second < SPECIALTIES.len());
        }
    }

    #[test]
    fn seed_populates_specialties_and_advocates() {
        let conn = open_memory_database().unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        let summary = seed_database(&conn, &mut rng).unwrap();
        assert_eq!(summary.specialties_inserted, SPECIALTIES.len());
        assert_eq!(summary.advocates_inserted, SAMPLE_ADVOCATES.len());
        assert_eq!(summary.links_inserted, SAMPLE_ADVOCATES.len() * 2);

        let advocates = list_advocates(&conn).unwrap();
        assert_eq!(advocates.len(), 15);
        assert!(advocates.iter().all(|a| a.specialties.len() == 2));
        assert_eq!(advocates[0].first_name, "John");
        assert_eq!(advocates[14].city, "Fort Worth");
    }

    #[test]
    fn reseeding_keeps_specialties_unique_and_appends_advocates() {
        let conn = open_memory_database().unwrap();
        let mut rng = StdRng::seed_from_u64(1);

        seed_database(&conn, &mut rng).unwrap();
        let second = seed_database(&conn, &mut rng).unwrap();

        assert_eq!(second.specialties_inserted, 0);
        assert_eq!(list_specialties(&conn).unwrap().len(), SPECIALTIES.len());
        assert_eq!(list_advocates(&conn).unwrap().len(), 30);
    }
}
