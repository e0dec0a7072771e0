//! Starter dataset used when nothing has been persisted yet.

use chrono::NaiveDate;

use crate::appointment::{Appointment, ColorTag};
use crate::employee::{Employee, EmployeeStatus};
use crate::notification::{Notification, NotificationKind};
use crate::service::Service;
use crate::status::AppointmentStatus;

#[allow(clippy::too_many_arguments)]
fn appointment(
    id: u32,
    client: &str,
    email: &str,
    (service_id, service): (u32, &str),
    (employee_id, employee): (u32, &str),
    date: (i32, u32, u32),
    time: &str,
    duration: &str,
    status: AppointmentStatus,
    price: &str,
    (day, start_hour): (u8, f64),
    color: ColorTag,
) -> Appointment {
    Appointment {
        id,
        client: client.to_string(),
        email: email.to_string(),
        service: service.to_string(),
        employee: employee.to_string(),
        date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap_or_default(),
        time: time.to_string(),
        duration: duration.to_string(),
        status,
        price: price.to_string(),
        day: Some(day),
        start_hour: Some(start_hour),
        color: Some(color),
        employee_id: Some(employee_id),
        service_id: Some(service_id),
    }
}

pub fn appointments() -> Vec<Appointment> {
    use AppointmentStatus::*;

    vec![
        appointment(
            1,
            "María González",
            "maria@ejemplo.com",
            (1, "Corte de Cabello"),
            (1, "Ana Martínez"),
            (2025, 11, 11),
            "09:00",
            "1h",
            Completed,
            "$35",
            (0, 9.0),
            ColorTag::Teal,
        ),
        appointment(
            2,
            "Carlos Ruiz",
            "carlos@ejemplo.com",
            (8, "Masaje Relajante"),
            (2, "Pedro López"),
            (2025, 11, 11),
            "10:30",
            "1.5h",
            InProgress,
            "$60",
            (0, 10.5),
            ColorTag::Marine,
        ),
        appointment(
            3,
            "Laura Sánchez",
            "laura@ejemplo.com",
            (6, "Manicura"),
            (3, "Sofia Torres"),
            (2025, 11, 12),
            "11:00",
            "1h",
            Pending,
            "$25",
            (1, 11.0),
            ColorTag::Amber,
        ),
        appointment(
            4,
            "Diego Morales",
            "diego@ejemplo.com",
            (2, "Corte y Barba"),
            (1, "Ana Martínez"),
            (2025, 11, 12),
            "14:00",
            "1h",
            Confirmed,
            "$45",
            (1, 14.0),
            ColorTag::Teal,
        ),
        appointment(
            5,
            "Elena Castro",
            "elena@ejemplo.com",
            (3, "Tinte"),
            (4, "María Flores"),
            (2025, 11, 13),
            "15:00",
            "2h",
            Cancelled,
            "$80",
            (2, 15.0),
            ColorTag::Marine,
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn employee(
    id: u32,
    name: &str,
    role: &str,
    email: &str,
    phone: &str,
    specialties: &[&str],
    rating: f64,
    appointments_today: u32,
) -> Employee {
    Employee {
        id,
        name: name.to_string(),
        role: role.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        specialties: specialties.iter().map(|s| s.to_string()).collect(),
        rating,
        appointments_today,
        avatar: crate::employee::avatar_initial(name),
        status: EmployeeStatus::Active,
    }
}

pub fn employees() -> Vec<Employee> {
    vec![
        employee(
            1,
            "Ana Martínez",
            "Estilista Senior",
            "ana.martinez@ejemplo.com",
            "+34 600 111 111",
            &["Corte", "Peinado", "Barba"],
            4.9,
            8,
        ),
        employee(
            2,
            "Pedro López",
            "Masajista Profesional",
            "pedro.lopez@ejemplo.com",
            "+34 600 222 222",
            &["Masaje Relajante", "Masaje Deportivo"],
            4.8,
            6,
        ),
        employee(
            3,
            "Sofia Torres",
            "Especialista en Estética",
            "sofia.torres@ejemplo.com",
            "+34 600 333 333",
            &["Manicura", "Pedicura", "Facial"],
            4.7,
            7,
        ),
        employee(
            4,
            "María Flores",
            "Colorista",
            "maria.flores@ejemplo.com",
            "+34 600 444 444",
            &["Tinte", "Mechas", "Balayage"],
            4.9,
            5,
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn service(
    id: u32,
    name: &str,
    category: &str,
    description: &str,
    duration: &str,
    price: &str,
    icon: &str,
    color: ColorTag,
    popular: bool,
) -> Service {
    Service {
        id,
        name: name.to_string(),
        category: category.to_string(),
        description: description.to_string(),
        duration: duration.to_string(),
        price: price.to_string(),
        icon: icon.to_string(),
        color,
        popular,
    }
}

pub fn services() -> Vec<Service> {
    use ColorTag::{Marine, Teal};

    vec![
        service(1, "Corte de Cabello", "Peluquería", "Corte de cabello profesional adaptado a tu estilo", "45 min", "$35", "scissors", Teal, true),
        service(2, "Corte y Barba", "Peluquería", "Servicio completo de corte de cabello y arreglo de barba", "1 hora", "$45", "scissors", Teal, true),
        service(3, "Tinte", "Coloración", "Tinte profesional con productos de alta calidad", "2 horas", "$80", "sparkles", Marine, false),
        service(4, "Mechas", "Coloración", "Mechas y reflejos para iluminar tu cabello", "2.5 horas", "$95", "sparkles", Marine, false),
        service(5, "Balayage", "Coloración", "Técnica moderna de coloración degradada", "3 horas", "$120", "sparkles", Marine, true),
        service(6, "Manicura", "Estética", "Cuidado completo de manos y uñas", "45 min", "$25", "sparkles", Teal, false),
        service(7, "Pedicura", "Estética", "Tratamiento completo para pies y uñas", "1 hora", "$30", "sparkles", Teal, false),
        service(8, "Masaje Relajante", "Bienestar", "Masaje terapéutico para aliviar tensiones", "1 hora", "$60", "sparkles", Marine, true),
    ]
}

fn notification(id: u32, kind: NotificationKind, title: &str, message: &str, time: &str, read: bool) -> Notification {
    Notification {
        id,
        kind,
        title: title.to_string(),
        message: message.to_string(),
        time: time.to_string(),
        read,
    }
}

pub fn notifications() -> Vec<Notification> {
    use NotificationKind as Kind;

    vec![
        notification(1, Kind::Appointment, "Nueva cita programada", "María González ha reservado un corte de cabello para mañana a las 10:00", "Hace 5 minutos", false),
        notification(2, Kind::Alert, "Cita cancelada", "Carlos Ruiz ha cancelado su cita de masaje programada para hoy", "Hace 15 minutos", false),
        notification(3, Kind::Payment, "Pago recibido", "Se ha procesado un pago de $80 por el servicio de tinte", "Hace 1 hora", true),
        notification(4, Kind::User, "Nuevo cliente registrado", "Laura Sánchez se ha registrado en la plataforma", "Hace 2 horas", true),
        notification(5, Kind::Success, "Cita completada", "Ana Martínez ha completado la cita con Diego Morales", "Hace 3 horas", true),
        notification(6, Kind::Info, "Recordatorio", "Tienes 5 citas pendientes de confirmación para esta semana", "Hace 4 horas", true),
        notification(7, Kind::Appointment, "Cita modificada", "Elena Castro ha cambiado su cita del jueves al viernes", "Hace 5 horas", true),
        notification(8, Kind::Alert, "Inventario bajo", "El stock de productos para tinte está por debajo del mínimo", "Hace 1 día", true),
    ]
}
