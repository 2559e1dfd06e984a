mod diary_by_date;
