//! `azurerm` provider resource types.

pub(crate) const TERRAFORM_TYPES: &[(&str, &str)] = &[
    ("azurerm_virtual_machine", "VM"),
    ("azurerm_linux_virtual_machine", "VM"),
    ("azurerm_windows_virtual_machine", "VM"),
    ("azurerm_virtual_machine_scale_set", "VMSS"),
    ("azurerm_app_service", "AppService"),
    ("azurerm_linux_web_app", "AppService"),
    ("azurerm_windows_web_app", "AppService"),
    ("azurerm_function_app", "FunctionApp"),
    ("azurerm_linux_function_app", "FunctionApp"),
    ("azurerm_windows_function_app", "FunctionApp"),
    ("azurerm_kubernetes_cluster", "AKS"),
    ("azurerm_container_registry", "ACR"),
    ("azurerm_container_group", "ContainerInstances"),
    ("azurerm_container_app", "ContainerApps"),
    ("azurerm_virtual_network", "VNet"),
    ("azurerm_subnet", "Subnet"),
    ("azurerm_lb", "LoadBalancer"),
    ("azurerm_application_gateway", "ApplicationGateway"),
    ("azurerm_frontdoor", "FrontDoor"),
    ("azurerm_cdn_profile", "CDN"),
    ("azurerm_firewall", "Firewall"),
    ("azurerm_virtual_network_gateway", "VPNGateway"),
    ("azurerm_bastion_host", "Bastion"),
    ("azurerm_private_endpoint", "PrivateEndpoint"),
    ("azurerm_network_security_group", "NSG"),
    ("azurerm_public_ip", "PublicIP"),
    ("azurerm_storage_account", "StorageAccount"),
    ("azurerm_storage_container", "BlobStorage"),
    ("azurerm_storage_share", "FileStorage"),
    ("azurerm_mssql_server", "SQLServer"),
    ("azurerm_mssql_database", "SQLDatabase"),
    ("azurerm_sql_server", "SQLServer"),
    ("azurerm_sql_database", "SQLDatabase"),
    ("azurerm_cosmosdb_account", "CosmosDB"),
    ("azurerm_redis_cache", "Redis"),
    ("azurerm_mysql_server", "MySQL"),
    ("azurerm_mysql_flexible_server", "MySQL"),
    ("azurerm_postgresql_server", "PostgreSQL"),
    ("azurerm_postgresql_flexible_server", "PostgreSQL"),
    ("azurerm_servicebus_namespace", "ServiceBus"),
    ("azurerm_eventhub_namespace", "EventHub"),
    ("azurerm_eventgrid_topic", "EventGrid"),
    ("azurerm_logic_app_workflow", "LogicApp"),
    ("azurerm_data_factory", "DataFactory"),
    ("azurerm_api_management", "APIM"),
    ("azurerm_signalr_service", "SignalR"),
    ("azurerm_key_vault", "KeyVault"),
    ("azurerm_user_assigned_identity", "ManagedIdentity"),
    ("azurerm_cognitive_account", "CognitiveServices"),
    ("azurerm_machine_learning_workspace", "MachineLearning"),
    ("azurerm_search_service", "AISearch"),
    ("azurerm_databricks_workspace", "Databricks"),
    ("azurerm_stream_analytics_job", "StreamAnalytics"),
    ("azurerm_application_insights", "ApplicationInsights"),
    ("azurerm_log_analytics_workspace", "LogAnalytics"),
    ("azurerm_iothub", "IoTHub"),
    ("azurerm_synapse_workspace", "Synapse"),
];
