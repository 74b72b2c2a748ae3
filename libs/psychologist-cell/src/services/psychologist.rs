use std::sync::OnceLock;

use chrono::Utc;
use regex::Regex;
use tracing::debug;

use shared_models::error::AppError;
use shared_store::Repository;

use crate::models::{
    CreatePsychologistRequest, Psychologist, PsychologistStore, UpdatePsychologistRequest,
};

// CRP registration numbers look like "06/12345".
fn crp_is_valid(crp: &str) -> bool {
    static CRP_RE: OnceLock<Regex> = OnceLock::new();
    CRP_RE
        .get_or_init(|| Regex::new(r"^\d{2}/\d{4,6}$").expect("static regex"))
        .is_match(crp)
}

pub struct PsychologistService {
    psychologists: PsychologistStore,
}

impl PsychologistService {
    pub fn new(psychologists: PsychologistStore) -> Self {
        Self { psychologists }
    }

    pub async fn list(&self, active_only: bool) -> Vec<Psychologist> {
        if active_only {
            self.psychologists.filter(|p| p.is_active).await
        } else {
            self.psychologists.all().await
        }
    }

    pub async fn get(&self, psychologist_id: i64) -> Result<Psychologist, AppError> {
        self.psychologists
            .get(psychologist_id)
            .await
            .ok_or_else(|| AppError::not_found("Psychologist", psychologist_id))
    }

    pub async fn create(
        &self,
        request: CreatePsychologistRequest,
    ) -> Result<Psychologist, AppError> {
        debug!("Creating psychologist profile for {}", request.name);

        if !crp_is_valid(&request.crp) {
            return Err(AppError::validation_field(
                "CRP must be in the XX/XXXXX format",
                "crp",
            ));
        }
        if request.hourly_rate <= 0.0 {
            return Err(AppError::validation_field(
                "Hourly rate must be positive",
                "hourly_rate",
            ));
        }

        let psychologist = Psychologist {
            id: 0,
            user_id: request.user_id,
            name: request.name,
            crp: request.crp,
            specialty: request.specialty,
            themes: request.themes.unwrap_or_default(),
            bio: request.bio.unwrap_or_default(),
            hourly_rate: request.hourly_rate,
            is_active: true,
            created_at: Utc::now(),
        };

        let psychologist = self.psychologists.add(psychologist).await;
        debug!("Psychologist created with id {}", psychologist.id);

        Ok(psychologist)
    }

    pub async fn update(
        &self,
        psychologist_id: i64,
        request: UpdatePsychologistRequest,
    ) -> Result<Psychologist, AppError> {
        let mut psychologist = self.get(psychologist_id).await?;

        if let Some(name) = request.name {
            psychologist.name = name;
        }
        if let Some(specialty) = request.specialty {
            psychologist.specialty = specialty;
        }
        if let Some(themes) = request.themes {
            psychologist.themes = themes;
        }
        if let Some(bio) = request.bio {
            psychologist.bio = bio;
        }
        if let Some(hourly_rate) = request.hourly_rate {
            if hourly_rate <= 0.0 {
                return Err(AppError::validation_field(
                    "Hourly rate must be positive",
                    "hourly_rate",
                ));
            }
            psychologist.hourly_rate = hourly_rate;
        }
        if let Some(is_active) = request.is_active {
            psychologist.is_active = is_active;
        }

        self.psychologists.update(psychologist).await
    }

    pub async fn delete(&self, psychologist_id: i64) -> Result<(), AppError> {
        self.get(psychologist_id).await?;
        self.psychologists.delete(psychologist_id).await
    }

    pub async fn activate(&self, psychologist_id: i64) -> Result<Psychologist, AppError> {
        self.set_active(psychologist_id, true).await
    }

    pub async fn deactivate(&self, psychologist_id: i64) -> Result<Psychologist, AppError> {
        self.set_active(psychologist_id, false).await
    }

    async fn set_active(
        &self,
        psychologist_id: i64,
        is_active: bool,
    ) -> Result<Psychologist, AppError> {
        let mut psychologist = self.get(psychologist_id).await?;
        psychologist.is_active = is_active;
        self.psychologists.update(psychologist).await
    }
}
