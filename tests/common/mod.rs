use std::sync::{Arc, Mutex};

use actix_web::web::Data;
use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use employee_api::model::employee::{Employee, EmployeeUpdate, NewEmployee};
use employee_api::store::{EmployeeStore, StoreError};

/// In-memory stand-in for the MongoDB store. Keeps insertion order and
/// applies the same write-time validation rules.
#[derive(Default)]
pub struct MemStore {
    employees: Mutex<Vec<Employee>>,
}

impl MemStore {
    pub fn count(&self) -> usize {
        self.employees.lock().unwrap().len()
    }
}

#[async_trait]
impl EmployeeStore for MemStore {
    async fn find_all(&self) -> Result<Vec<Employee>, StoreError> {
        Ok(self.employees.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Employee, StoreError> {
        self.employees
            .lock()
            .unwrap()
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn insert(&self, new: NewEmployee) -> Result<Employee, StoreError> {
        new.validate().map_err(StoreError::Validation)?;

        let now = Utc::now();
        let employee = Employee {
            id: Uuid::new_v4().simple().to_string(),
            name: new.name,
            location: new.location,
            position: new.position,
            salary: new.salary,
            created_at: now,
            updated_at: now,
        };
        self.employees.lock().unwrap().push(employee.clone());
        Ok(employee)
    }

    async fn update_by_id(
        &self,
        id: &str,
        changes: EmployeeUpdate,
    ) -> Result<Employee, StoreError> {
        changes.validate().map_err(StoreError::Validation)?;

        let mut employees = self.employees.lock().unwrap();
        let employee = employees
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(StoreError::NotFound)?;

        if let Some(name) = changes.name {
            employee.name = name;
        }
        if let Some(location) = changes.location {
            employee.location = location;
        }
        if let Some(position) = changes.position {
            employee.position = position;
        }
        if let Some(salary) = changes.salary {
            employee.salary = salary;
        }
        employee.updated_at = Utc::now();

        Ok(employee.clone())
    }

    async fn delete_by_id(&self, id: &str) -> Result<Employee, StoreError> {
        let mut employees = self.employees.lock().unwrap();
        let pos = employees
            .iter()
            .position(|e| e.id == id)
            .ok_or(StoreError::NotFound)?;
        Ok(employees.remove(pos))
    }
}

pub fn mem_store() -> Arc<MemStore> {
    Arc::new(MemStore::default())
}

pub fn store_data(store: &Arc<MemStore>) -> Data<dyn EmployeeStore> {
    Data::from(store.clone() as Arc<dyn EmployeeStore>)
}
