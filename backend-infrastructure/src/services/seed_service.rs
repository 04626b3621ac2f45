use anyhow::Result;
use tracing::info;

use backend_domain::ports::ReferenceRepository;
use backend_domain::{Course, Student, Weekday};

pub fn demo_student() -> Student {
    Student {
        given_name: "Max".to_string(),
        family_name: "Mustermann".to_string(),
        matriculation_number: "123456".to_string(),
        caller_address: "0800111111".to_string(),
    }
}

pub fn demo_course() -> Course {
    Course {
        class_id: "MM14".to_string(),
        title: "Konzeption von Sprachdialogsystemen und Realisierung von Sprachportalen"
            .to_string(),
        description: "Vorlesung: Architektur und Komponenten von Voice-Plattformen, \
            Konzeptionierung eines Voice-User-Interfaces, Dialog-Implementierung in VoiceXML. \
            Praktikum: Realisierung eines Sprachportals mit dynamischem Content aus einer \
            Datenbank."
            .to_string(),
        weekday: Weekday::Monday,
    }
}

pub async fn seed_demo_data(repo: &dyn ReferenceRepository) -> Result<()> {
    let student = demo_student();
    if repo
        .find_students_by_matriculation_number(&student.matriculation_number)
        .await?
        .is_empty()
    {
        repo.insert_student(&student).await?;
        info!("seeded demo student {}", student.matriculation_number);
    }

    let course = demo_course();
    if repo
        .find_courses_by_class_id(&course.class_id)
        .await?
        .is_empty()
    {
        repo.insert_course(&course).await?;
        info!("seeded demo course {}", course.class_id);
    }
    Ok(())
}
