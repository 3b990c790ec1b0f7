mod resolve_prompt_file_contract;
