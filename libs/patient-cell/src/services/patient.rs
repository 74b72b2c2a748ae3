use std::sync::OnceLock;

use chrono::Utc;
use regex::Regex;
use tracing::debug;

use shared_models::error::AppError;
use shared_store::Repository;

use crate::models::{CreatePatientRequest, Patient, PatientStore, UpdatePatientRequest};

const MIN_PHONE_LEN: usize = 8;

fn email_is_valid(email: &str) -> bool {
    static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
    EMAIL_RE
        .get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("static regex"))
        .is_match(email)
}

pub struct PatientService {
    patients: PatientStore,
}

impl PatientService {
    pub fn new(patients: PatientStore) -> Self {
        Self { patients }
    }

    pub async fn list(&self) -> Vec<Patient> {
        self.patients.all().await
    }

    pub async fn get(&self, patient_id: i64) -> Result<Patient, AppError> {
        self.patients
            .get(patient_id)
            .await
            .ok_or_else(|| AppError::not_found("Patient", patient_id))
    }

    pub async fn create(&self, request: CreatePatientRequest) -> Result<Patient, AppError> {
        debug!("Creating patient profile for {}", request.email);

        if request.name.trim().is_empty() {
            return Err(AppError::validation_field("Name must not be empty", "name"));
        }
        if !email_is_valid(&request.email) {
            return Err(AppError::validation_field("Invalid email", "email"));
        }
        if request.phone.len() < MIN_PHONE_LEN {
            return Err(AppError::validation_field(
                "Phone must be at least 8 characters",
                "phone",
            ));
        }

        let patient = Patient {
            id: 0,
            name: request.name.trim().to_string(),
            email: request.email,
            phone: request.phone,
            cpf: request.cpf,
            created_at: Utc::now(),
        };

        let patient = self.patients.add(patient).await;
        debug!("Patient created with id {}", patient.id);

        Ok(patient)
    }

    pub async fn update(
        &self,
        patient_id: i64,
        request: UpdatePatientRequest,
    ) -> Result<Patient, AppError> {
        let mut patient = self.get(patient_id).await?;

        if let Some(name) = request.name {
            if name.trim().is_empty() {
                return Err(AppError::validation_field("Name must not be empty", "name"));
            }
            patient.name = name.trim().to_string();
        }
        if let Some(email) = request.email {
            if !email_is_valid(&email) {
                return Err(AppError::validation_field("Invalid email", "email"));
            }
            patient.email = email;
        }
        if let Some(phone) = request.phone {
            if phone.len() < MIN_PHONE_LEN {
                return Err(AppError::validation_field(
                    "Phone must be at least 8 characters",
                    "phone",
                ));
            }
            patient.phone = phone;
        }
        if let Some(cpf) = request.cpf {
            patient.cpf = Some(cpf);
        }

        self.patients.update(patient).await
    }

    pub async fn delete(&self, patient_id: i64) -> Result<(), AppError> {
        self.get(patient_id).await?;
        self.patients.delete(patient_id).await
    }
}
