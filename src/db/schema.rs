// Column names follow the JSON wire format of the web client.
pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS tasks (
    id TEXT PRIMARY KEY,
    titulo TEXT NOT NULL,
    descricao TEXT,
    concluida INTEGER NOT NULL DEFAULT 0,
    data_criacao TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS pomodoros (
    id TEXT PRIMARY KEY,
    tarefa_id TEXT NOT NULL,
    duracao_trabalho INTEGER NOT NULL DEFAULT 25,
    duracao_descanso INTEGER NOT NULL DEFAULT 5,
    data_inicio TEXT NOT NULL,
    data_fim TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_pomodoros_tarefa ON pomodoros(tarefa_id);
CREATE INDEX IF NOT EXISTS idx_pomodoros_inicio ON pomodoros(data_inicio);
"#;
