use actix_web::{HttpResponse, Responder, web};
use serde::Deserialize;
use serde_json::json;
use tracing::error;

use crate::model::employee::{EmployeeUpdate, NewEmployee};
use crate::store::{EmployeeStore, StoreError};

#[derive(Debug, Deserialize)]
pub struct CreateEmployeeRequest {
    pub name: Option<String>,
    pub location: Option<String>,
    pub position: Option<String>,
    pub salary: Option<String>,
}

impl CreateEmployeeRequest {
    /// All four fields must be present and non-empty; anything less is a
    /// client error and must not reach the store.
    fn into_record(self) -> Option<NewEmployee> {
        match (self.name, self.location, self.position, self.salary) {
            (Some(name), Some(location), Some(position), Some(salary))
                if !name.is_empty()
                    && !location.is_empty()
                    && !position.is_empty()
                    && !salary.is_empty() =>
            {
                Some(NewEmployee {
                    name,
                    location,
                    position,
                    salary,
                })
            }
            _ => None,
        }
    }
}

/// Update carries the id in the body. Content fields are deliberately not
/// checked for presence here; the store validates whatever is provided.
#[derive(Debug, Deserialize)]
pub struct UpdateEmployeeRequest {
    pub id: Option<String>,
    #[serde(flatten)]
    pub changes: EmployeeUpdate,
}

pub async fn list_employees(store: web::Data<dyn EmployeeStore>) -> impl Responder {
    match store.find_all().await {
        Ok(employees) => HttpResponse::Ok().json(employees),
        Err(e) => {
            error!(error = %e, "Failed to fetch employees");
            HttpResponse::InternalServerError().json(json!({
                "message": "Error fetching employees",
                "error": e.to_string(),
            }))
        }
    }
}

pub async fn get_employee(
    store: web::Data<dyn EmployeeStore>,
    path: web::Path<String>,
) -> impl Responder {
    let id = path.into_inner();

    match store.find_by_id(&id).await {
        Ok(employee) => HttpResponse::Ok().json(employee),
        Err(StoreError::NotFound) => HttpResponse::NotFound().json(json!({
            "message": "Employee not found"
        })),
        Err(e) => {
            error!(error = %e, %id, "Failed to fetch employee");
            HttpResponse::InternalServerError().json(json!({
                "message": "Error fetching employee",
                "error": e.to_string(),
            }))
        }
    }
}

pub async fn create_employee(
    store: web::Data<dyn EmployeeStore>,
    payload: web::Json<CreateEmployeeRequest>,
) -> impl Responder {
    let Some(new) = payload.into_inner().into_record() else {
        return HttpResponse::BadRequest().json(json!({
            "message": "All fields are required"
        }));
    };

    match store.insert(new).await {
        Ok(employee) => HttpResponse::Created().json(json!({
            "message": "Employee added successfully",
            "employee": employee,
        })),
        Err(e) => {
            error!(error = %e, "Failed to add employee");
            HttpResponse::InternalServerError().json(json!({
                "message": "Error adding employee",
                "error": e.to_string(),
            }))
        }
    }
}

pub async fn update_employee(
    store: web::Data<dyn EmployeeStore>,
    payload: web::Json<UpdateEmployeeRequest>,
) -> impl Responder {
    let body = payload.into_inner();
    let Some(id) = body.id.filter(|id| !id.is_empty()) else {
        return HttpResponse::BadRequest().json(json!({
            "message": "Employee ID is required"
        }));
    };

    match store.update_by_id(&id, body.changes).await {
        Ok(employee) => HttpResponse::Ok().json(json!({
            "message": "Employee updated successfully",
            "employee": employee,
        })),
        Err(StoreError::NotFound) => HttpResponse::NotFound().json(json!({
            "message": "Employee not found"
        })),
        Err(e) => {
            error!(error = %e, %id, "Failed to update employee");
            HttpResponse::InternalServerError().json(json!({
                "message": "Error updating employee",
                "error": e.to_string(),
            }))
        }
    }
}

pub async fn delete_employee(
    store: web::Data<dyn EmployeeStore>,
    path: web::Path<String>,
) -> impl Responder {
    let id = path.into_inner();

    match store.delete_by_id(&id).await {
        Ok(employee) => HttpResponse::Ok().json(json!({
            "message": "Employee deleted successfully",
            "employee": employee,
        })),
        Err(StoreError::NotFound) => HttpResponse::NotFound().json(json!({
            "message": "Employee not found"
        })),
        Err(e) => {
            error!(error = %e, %id, "Failed to delete employee");
            HttpResponse::InternalServerError().json(json!({
                "message": "Error deleting employee",
                "error": e.to_string(),
            }))
        }
    }
}
