use serde::Deserialize;

use crate::infra::config::{AppConfig, AssessmentConfig, ChatConfig, LayoutConfig, LogConfig};

#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    pub logging: Option<FileLogConfig>,
    pub chat: Option<FileChatConfig>,
    pub assessment: Option<FileAssessmentConfig>,
    pub layout: Option<FileLayoutConfig>,
}

impl FileConfig {
    pub fn merge_into(self, config: &mut AppConfig) {
        if let Some(logging) = self.logging {
            logging.merge_into(&mut config.logging);
        }

        if let Some(chat) = self.chat {
            chat.merge_into(&mut config.chat);
        }

        if let Some(assessment) = self.assessment {
            assessment.merge_into(&mut config.assessment);
        }

        if let Some(layout) = self.layout {
            layout.merge_into(&mut config.layout);
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileLogConfig {
    pub level: Option<String>,
}

impl FileLogConfig {
    fn merge_into(self, config: &mut LogConfig) {
        if let Some(level) = self.level {
            config.level = level;
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileChatConfig {
    pub reply_delay_ms: Option<u64>,
}

impl FileChatConfig {
    fn merge_into(self, config: &mut ChatConfig) {
        if let Some(delay_ms) = self.reply_delay_ms {
            config.reply_delay_ms = delay_ms;
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileAssessmentConfig {
    pub phase_duration_ms: Option<u64>,
}

impl FileAssessmentConfig {
    fn merge_into(self, config: &mut AssessmentConfig) {
        if let Some(duration_ms) = self.phase_duration_ms {
            config.phase_duration_ms = duration_ms;
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileLayoutConfig {
    pub compact_width: Option<u16>,
}

impl FileLayoutConfig {
    fn merge_into(self, config: &mut LayoutConfig) {
        if let Some(width) = self.compact_width {
            config.compact_width = width;
        }
    }
}
