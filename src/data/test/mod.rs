mod voice_log;
