use actix_web::web;

use crate::api::employee;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api").service(
            web::scope("/employeelist")
                // /api/employeelist
                .service(
                    web::resource("")
                        .route(web::get().to(employee::list_employees))
                        .route(web::post().to(employee::create_employee))
                        .route(web::put().to(employee::update_employee)),
                )
                // /api/employeelist/{id}
                .service(
                    web::resource("/{id}")
                        .route(web::get().to(employee::get_employee))
                        .route(web::delete().to(employee::delete_employee)),
                ),
        ),
    );
}
