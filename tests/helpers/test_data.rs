//! Test data fixtures
//!
//! Backend payloads shared by the integration tests.

use serde_json::{json, Value};

pub fn admin_user() -> Value {
    json!({
        "id": 1,
        "telegram_id": 123456789,
        "username": "coach",
        "first_name": "Ирина",
        "last_name": "Смирнова",
        "role": "admin"
    })
}

pub fn parent_user() -> Value {
    json!({
        "id": 2,
        "telegram_id": 987654321,
        "username": "mama",
        "first_name": "Ольга",
        "role": "parent"
    })
}

pub fn sport_groups() -> Value {
    json!([
        {
            "id": 1,
            "name": "Дзюдо младшие",
            "category": "judo",
            "description": "Дети 4-6 лет",
            "schedule": "Пн, Ср 17:00",
            "price_8": 4000,
            "price_12": 5500,
            "price_single": 600
        },
        {
            "id": 2,
            "name": "Дзюдо старшие",
            "category": "judo",
            "price_8": 4500
        },
        {
            "id": 3,
            "name": "Художественная гимнастика",
            "category": "gymnastics",
            "price_8": 3800,
            "price_12": 5200
        }
    ])
}

pub fn roster(is_completed: bool) -> Value {
    json!({
        "attendance_id": 55,
        "is_completed": is_completed,
        "participants": [
            {"id": 10, "full_name": "Миша", "parent_phone": "+7 900", "is_present": true},
            {"id": 11, "full_name": "Катя", "parent_phone": "+7 901", "is_present": true},
            {"id": 12, "full_name": "Петя", "parent_phone": "+7 902", "is_present": false,
             "absence_reason": "excused"}
        ]
    })
}

pub fn scheduled_dates() -> Value {
    json!([
        {"date": "2025-09-01", "day_name": "Пн", "day_number": 1, "month": "сентября",
         "year": 2025, "start_time": "17:00", "end_time": "18:00",
         "has_attendance": false, "is_completed": false}
    ])
}

pub fn pending_payment() -> Value {
    json!([
        {"id": 7, "group_id": 1, "participant_name": "Миша", "participant_phone": "+7 900",
         "sport_group": "Дзюдо младшие", "subscription_type": "8 занятий", "amount": 4000,
         "payment_method": "cash", "status": "pending", "created_at": "2025-09-01"}
    ])
}
