use chrono::NaiveDate;
use sea_orm::*;

use crate::models::employee::Position;
use crate::models::{company, employee};

/// Seed a couple of companies and employees for demos and manual testing.
pub async fn seed_demo_data(db: &DatabaseConnection) -> Result<(), DbErr> {
    let now = chrono::Utc::now().to_rfc3339();

    let companies = [("Рога и Копыта", "ООО"), ("Вектор", "АО"), ("Заря", "ИП")];

    let mut company_ids = Vec::new();
    for (name, legal_form) in companies {
        let model = company::ActiveModel {
            name: Set(name.to_owned()),
            legal_form: Set(legal_form.to_owned()),
            created_at: Set(now.clone()),
            updated_at: Set(now.clone()),
            ..Default::default()
        };
        let inserted = company::Entity::insert(model)
            .on_conflict(
                sea_orm::sea_query::OnConflict::column(company::Column::Name)
                    .do_nothing()
                    .to_owned(),
            )
            .exec(db)
            .await?;
        company_ids.push(inserted.last_insert_id);
    }

    let employees = [
        ("Анна", "Ли", Position::Developer, (2021, 3, 15), 0usize),
        ("Борис", "Ким", Position::Manager, (2018, 7, 1), 0),
        ("Вера", "Цой", Position::Tester, (2023, 11, 20), 1),
        ("Глеб", "Пак", Position::BusinessAnalyst, (2020, 1, 9), 1),
    ];

    for (first, last, position, (y, m, d), company_idx) in employees {
        let Some(hire_date) = NaiveDate::from_ymd_opt(y, m, d) else {
            continue;
        };
        let model = employee::ActiveModel {
            first_name: Set(first.to_owned()),
            last_name: Set(last.to_owned()),
            middle_name: Set(None),
            position: Set(position),
            hire_date: Set(hire_date),
            company_id: Set(company_ids[company_idx]),
            created_at: Set(now.clone()),
            updated_at: Set(now.clone()),
            ..Default::default()
        };
        employee::Entity::insert(model).exec(db).await?;
    }

    Ok(())
}
