use chrono::Utc;
use tracing::debug;

use shared_models::error::AppError;
use shared_store::Repository;

use crate::models::{Clinic, ClinicStore, CreateClinicRequest, UpdateClinicRequest};

pub struct ClinicService {
    clinics: ClinicStore,
}

impl ClinicService {
    pub fn new(clinics: ClinicStore) -> Self {
        Self { clinics }
    }

    pub async fn list(&self) -> Vec<Clinic> {
        self.clinics.all().await
    }

    pub async fn get(&self, clinic_id: i64) -> Result<Clinic, AppError> {
        self.clinics
            .get(clinic_id)
            .await
            .ok_or_else(|| AppError::not_found("Clinic", clinic_id))
    }

    pub async fn create(&self, request: CreateClinicRequest) -> Result<Clinic, AppError> {
        debug!("Creating clinic {}", request.name);

        if request.name.trim().is_empty() {
            return Err(AppError::validation_field("Name must not be empty", "name"));
        }
        if !request.email.contains('@') {
            return Err(AppError::validation_field("Invalid email", "email"));
        }

        let clinic = Clinic {
            id: 0,
            user_id: request.user_id,
            name: request.name.trim().to_string(),
            address: request.address,
            phone: request.phone,
            email: request.email,
            created_at: Utc::now(),
        };

        Ok(self.clinics.add(clinic).await)
    }

    pub async fn update(
        &self,
        clinic_id: i64,
        request: UpdateClinicRequest,
    ) -> Result<Clinic, AppError> {
        let mut clinic = self.get(clinic_id).await?;

        if let Some(name) = request.name {
            if name.trim().is_empty() {
                return Err(AppError::validation_field("Name must not be empty", "name"));
            }
            clinic.name = name.trim().to_string();
        }
        if let Some(address) = request.address {
            clinic.address = address;
        }
        if let Some(phone) = request.phone {
            clinic.phone = phone;
        }
        if let Some(email) = request.email {
            if !email.contains('@') {
                return Err(AppError::validation_field("Invalid email", "email"));
            }
            clinic.email = email;
        }

        self.clinics.update(clinic).await
    }

    pub async fn delete(&self, clinic_id: i64) -> Result<(), AppError> {
        self.get(clinic_id).await?;
        self.clinics.delete(clinic_id).await
    }
}
