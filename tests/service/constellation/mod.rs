mod sky;
