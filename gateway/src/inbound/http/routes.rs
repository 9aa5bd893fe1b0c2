//! Route wiring for the gateway's HTTP surface.
//!
//! Everything under `/api` bypasses the route gate (handlers forward the
//! caller's credential themselves); page endpoints rely on the gate having
//! verified the session first. Literal segments are registered before
//! `{id}` routes so `/events/upcoming` never matches as an id.

use actix_web::web;

use super::{attendees, auth, events, health, institutions, pages};

/// Register every handler on the application.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(auth::login)
            .service(auth::register)
            .service(auth::logout)
            .service(auth::profile)
            .service(auth::update_profile)
            .service(events::list)
            .service(events::upcoming)
            .service(events::available)
            .service(events::search)
            .service(events::my_events)
            .service(events::by_category)
            .service(events::create)
            .service(events::get)
            .service(events::update)
            .service(events::delete)
            .service(institutions::list)
            .service(institutions::verified)
            .service(institutions::by_category)
            .service(institutions::create)
            .service(institutions::get)
            .service(institutions::update)
            .service(institutions::delete)
            .service(attendees::join)
            .service(attendees::leave)
            .service(attendees::for_event)
            .service(attendees::my_events),
    )
    .service(health::ready)
    .service(health::live)
    .service(pages::index)
    .service(pages::dashboard)
    .service(pages::event_detail)
    .service(pages::profile);
}
