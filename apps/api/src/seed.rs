use chrono::{NaiveTime, Utc};
use tracing::info;

use auth_cell::models::User;
use auth_cell::services::password_digest;
use clinic_cell::models::Clinic;
use lead_cell::models::{Lead, LeadStatus};
use patient_cell::models::Patient;
use psychologist_cell::models::{Availability, Psychologist};
use shared_models::auth::UserType;
use shared_store::Repository;

use crate::router::Stores;

fn hhmm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("valid seed time")
}

/// Loads a small demo dataset so the API is usable out of the box.
pub async fn load_demo_data(stores: &Stores) {
    let now = Utc::now();

    let ana = stores
        .users
        .add(User {
            id: 0,
            name: "Ana Souza".to_string(),
            email: "ana@synapse.dev".to_string(),
            password_digest: password_digest("ana123"),
            user_type: UserType::Psychologist,
            created_at: now,
        })
        .await;

    stores
        .users
        .add(User {
            id: 0,
            name: "Bruno Lima".to_string(),
            email: "bruno@synapse.dev".to_string(),
            password_digest: password_digest("bruno123"),
            user_type: UserType::Patient,
            created_at: now,
        })
        .await;

    let clinic_user = stores
        .users
        .add(User {
            id: 0,
            name: "Clínica Bem Estar".to_string(),
            email: "contato@bemestar.dev".to_string(),
            password_digest: password_digest("clinica123"),
            user_type: UserType::Clinic,
            created_at: now,
        })
        .await;

    let psychologist = stores
        .psychologists
        .add(Psychologist {
            id: 0,
            user_id: ana.id,
            name: "Ana Souza".to_string(),
            crp: "06/12345".to_string(),
            specialty: "Cognitive Behavioral Therapy".to_string(),
            themes: vec!["anxiety".to_string(), "burnout".to_string()],
            bio: "CBT practitioner focused on anxiety disorders.".to_string(),
            hourly_rate: 180.0,
            is_active: true,
            created_at: now,
        })
        .await;

    // Weekday mornings plus two afternoons.
    for (day_of_week, start, end) in [
        (0u8, hhmm(9, 0), hhmm(12, 0)),
        (1, hhmm(9, 0), hhmm(12, 0)),
        (2, hhmm(14, 0), hhmm(18, 0)),
        (3, hhmm(9, 0), hhmm(12, 0)),
        (4, hhmm(14, 0), hhmm(18, 0)),
    ] {
        stores
            .availabilities
            .add(Availability {
                id: 0,
                psychologist_id: psychologist.id,
                day_of_week,
                start_time: start,
                end_time: end,
                is_active: true,
            })
            .await;
    }

    stores
        .patients
        .add(Patient {
            id: 0,
            name: "Bruno Lima".to_string(),
            email: "bruno@synapse.dev".to_string(),
            phone: "11988887777".to_string(),
            cpf: Some("123.456.789-00".to_string()),
            created_at: now,
        })
        .await;

    stores
        .clinics
        .add(Clinic {
            id: 0,
            user_id: clinic_user.id,
            name: "Clínica Bem Estar".to_string(),
            address: "Rua das Flores, 100 - São Paulo".to_string(),
            phone: "1133334444".to_string(),
            email: "contato@bemestar.dev".to_string(),
            created_at: now,
        })
        .await;

    stores
        .leads
        .add(Lead {
            id: 0,
            name: "Carla Dias".to_string(),
            email: "carla@example.com".to_string(),
            phone: "11977776666".to_string(),
            source: "landing-page".to_string(),
            status: LeadStatus::New,
            notes: None,
            created_at: now,
            converted_at: None,
            converted_to_patient_id: None,
        })
        .await;

    info!(
        "Demo data loaded: {} users, {} availability windows",
        stores.users.all().await.len(),
        stores.availabilities.all().await.len()
    );
}
